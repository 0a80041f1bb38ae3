mod cli;
mod format;
mod run;
mod settings;

pub use cli::*;
pub use format::*;
pub use run::*;
pub use settings::*;
