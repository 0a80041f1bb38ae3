mod content;
mod error;
mod merge;
mod message;
mod parse;
mod role;
mod tool_call;
mod transformer;
mod usage;

pub use content::*;
pub use error::*;
pub use merge::*;
pub use message::*;
pub use parse::*;
pub use role::*;
pub use tool_call::*;
pub use transformer::*;
pub use usage::*;
