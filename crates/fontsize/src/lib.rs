mod command;
mod coordinator;
mod host;
mod markup;
mod plugin;
mod size;

pub use crate::command::*;
pub use crate::coordinator::*;
pub use crate::host::*;
pub use crate::markup::*;
pub use crate::plugin::*;
pub use crate::size::*;
