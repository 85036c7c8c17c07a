//! Calculator module for the keypad input-state machine.
//!
//! This module provides functionality to:
//! - Represent keypad input as typed events
//! - Reduce a stream of events into a running result
//! - Parse and format operands for the display
//! - Copy the display to the clipboard

mod clipboard;
mod engine;
mod event;
mod number;
mod operator;

pub use clipboard::copy_to_clipboard;
pub use engine::{EngineState, Pending, Transition};
pub use event::{Digit, Event};
pub use number::{ERROR_TEXT, format_number, is_error_value, parse_number};
pub use operator::Operator;
