//! Keypad calculator: a pure input-state machine plus the terminal front end
//! that drives it.
//!
//! The engine lives in [`calculator`]; everything else turns keys into
//! events ([`input`]), owns the running state ([`session`]) or deals with
//! the outside world.

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod session;
pub mod tui;

pub use calculator::{EngineState, Event, Operator};
pub use session::Session;
