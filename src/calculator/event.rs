//! Typed input events accepted by the engine.

use super::Operator;
use serde::Serialize;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Digit(u8);

impl Digit {
    pub fn new(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(c)
    }
}

/// One discrete input to the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Event {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
}

impl Event {
    /// Map a keyboard key name to an event.
    ///
    /// Single characters cover the keypad (`0`-`9`, `.`, `+ - * /`, `=`,
    /// `c`/`C`); `Enter`, `Backspace` and `Delete` are named keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => return Some(Self::Equals),
            "Backspace" | "Delete" => return Some(Self::Delete),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if let Some(digit) = Digit::new(c) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Some(Self::Operator(op));
        }

        match c {
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
