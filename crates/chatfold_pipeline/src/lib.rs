mod fn_stage;
mod merge;
mod stage;

pub use fn_stage::*;
pub use merge::*;
pub use stage::*;
