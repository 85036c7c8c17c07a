//! Input boundary: turns keys into calculator events.

mod script;
mod terminal;

pub use script::parse_script;
pub use terminal::{Command, convert_key_event};
