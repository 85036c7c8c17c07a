//! The calculator input-state machine.
//!
//! [`EngineState`] is a plain value; every operation borrows the current
//! state and returns a [`Transition`] holding the next state and the text to
//! render. Nothing here can fail: non-finite results are folded into the
//! [`ERROR_TEXT`] sentinel.

use super::number::{ERROR_TEXT, format_number, parse_number};
use super::{Digit, Event, Operator};
use serde::Serialize;

/// Left operand and operator saved by an operator press.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pending {
    pub value: f64,
    pub operator: Operator,
}

/// Session state of the calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineState {
    current_input: String,
    pending: Option<Pending>,
    pending_reset: bool,
    display: String,
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: EngineState,
    pub display: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// The startup state: entry `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            pending: None,
            pending_reset: false,
            display: "0".to_string(),
        }
    }

    /// Text of the number being entered (or the last result).
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn stored_value(&self) -> Option<f64> {
        self.pending.map(|p| p.value)
    }

    pub fn active_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Whether the next digit starts a fresh numeral.
    pub fn pending_reset(&self) -> bool {
        self.pending_reset
    }

    /// Text last rendered to the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the entry holds the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_TEXT
    }

    /// Dispatch a typed event to the matching operation.
    pub fn apply(&self, event: Event) -> Transition {
        match event {
            Event::Digit(d) => self.digit(d),
            Event::DecimalPoint => self.decimal_point(),
            Event::Operator(op) => self.set_operator(op),
            Event::Equals => self.equals(),
            Event::Clear => self.clear_all(),
            Event::Delete => self.delete_one(),
        }
    }

    pub fn digit(&self, d: Digit) -> Transition {
        let mut next = self.clone();

        if next.pending_reset || next.current_input == "0" {
            next.current_input = d.as_char().to_string();
            next.pending_reset = false;
        } else {
            next.current_input.push(d.as_char());
        }

        next.show_input()
    }

    pub fn decimal_point(&self) -> Transition {
        let mut next = self.clone();

        if next.pending_reset {
            next.current_input = "0.".to_string();
            next.pending_reset = false;
        } else if !next.current_input.contains('.') {
            next.current_input.push('.');
        }

        next.show_input()
    }

    /// Record `op` as the pending operator.
    ///
    /// A second operator entered after a fresh operand folds the pending
    /// computation first, so `2 + 3 *` leaves `5` stored and displayed.
    pub fn set_operator(&self, op: Operator) -> Transition {
        // The sentinel is not an operand; wait for a numeral or a clear
        if self.is_error() {
            return self.unchanged();
        }

        let mut next = self.clone();
        let input_value = parse_number(&self.current_input);

        let value = match self.pending {
            None => input_value,
            Some(pending) if !self.pending_reset => {
                let folded = pending.operator.apply(pending.value, input_value);
                next.display = format_number(folded);
                folded
            }
            Some(pending) => pending.value,
        };

        next.pending = Some(Pending {
            value,
            operator: op,
        });
        next.pending_reset = true;

        next.transition()
    }

    /// Resolve the pending operation. No-op when nothing is pending.
    pub fn equals(&self) -> Transition {
        let Some(pending) = self.pending else {
            return self.unchanged();
        };

        let result = pending
            .operator
            .apply(pending.value, parse_number(&self.current_input));

        let mut next = self.clone();
        next.current_input = format_number(result);
        next.pending = None;
        next.pending_reset = true;

        next.show_input()
    }

    pub fn clear_all(&self) -> Transition {
        Self::new().transition()
    }

    /// Erase the last entered character. No-op right after an operator or
    /// equals, since nothing uncommitted is left to erase; the error
    /// sentinel is the exception and resets to `"0"`.
    pub fn delete_one(&self) -> Transition {
        let mut next = self.clone();

        if next.is_error() {
            next.current_input = "0".to_string();
            next.pending_reset = false;
            return next.show_input();
        }
        if self.pending_reset {
            return self.unchanged();
        }

        if next.current_input.chars().count() <= 1 {
            next.current_input = "0".to_string();
        } else {
            next.current_input.pop();
        }

        next.show_input()
    }

    fn show_input(mut self) -> Transition {
        self.display = self.current_input.clone();
        self.transition()
    }

    fn unchanged(&self) -> Transition {
        self.clone().transition()
    }

    fn transition(self) -> Transition {
        Transition {
            display: self.display.clone(),
            state: self,
        }
    }
}
