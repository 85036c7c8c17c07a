//! A calculator session: one engine state, updated in place per event.

use crate::calculator::{ERROR_TEXT, EngineState, Event};
use crate::error::ScriptError;
use crate::input::parse_script;

/// One applied event and the display it produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Step {
    pub event: Event,
    pub display: String,
}

#[derive(Debug, Default)]
pub struct Session {
    state: EngineState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Apply one event and return the new display.
    pub fn dispatch(&mut self, event: Event) -> &str {
        let was_error = self.state.display() == ERROR_TEXT;
        let transition = self.state.apply(event);
        self.state = transition.state;

        tracing::debug!(
            ?event,
            display = %transition.display,
            input = self.state.current_input(),
            pending = ?self.state.pending(),
            "applied event"
        );
        if reached_error(was_error, &transition.display) {
            tracing::info!(?event, "result is not a finite number");
        }

        self.state.display()
    }

    pub fn reset(&mut self) {
        self.dispatch(Event::Clear);
    }

    /// Run every key of a script, returning each step.
    ///
    /// The script is tokenized up front, so an unknown key leaves the
    /// session untouched.
    pub fn feed_script(&mut self, script: &str) -> Result<Vec<Step>, ScriptError> {
        let events = parse_script(script)?;
        tracing::debug!(keys = events.len(), "running key script");

        Ok(events
            .into_iter()
            .map(|event| Step {
                event,
                display: self.dispatch(event).to_string(),
            })
            .collect())
    }
}

/// Whether a transition newly put the error sentinel on the display,
/// from either an equals result or a folded chain.
fn reached_error(was_error: bool, display: &str) -> bool {
    !was_error && display == ERROR_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_updates_in_place() {
        let mut session = Session::new();
        session.feed_script("2+3*4").unwrap();
        assert_eq!(session.display(), "4");
        assert_eq!(session.dispatch(Event::Equals), "20");
        assert_eq!(session.state().current_input(), "20");
    }

    #[test]
    fn test_steps_report_each_display() {
        let mut session = Session::new();
        let steps = session.feed_script("2+3*").unwrap();
        let displays: Vec<&str> = steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, ["2", "2", "3", "5"]);
    }

    #[test]
    fn test_division_by_zero() {
        let mut session = Session::new();
        session.feed_script("5/0=").unwrap();
        assert_eq!(session.display(), ERROR_TEXT);
    }

    #[test]
    fn test_folded_error_is_reported() {
        let mut session = Session::new();
        session.feed_script("5/0").unwrap();
        let was_error = session.display() == ERROR_TEXT;

        let display = session.dispatch(Event::Operator(crate::calculator::Operator::Add));
        assert_eq!(display, ERROR_TEXT);
        assert!(reached_error(was_error, display));
        assert_eq!(session.state().current_input(), "0");
    }

    #[test]
    fn test_error_reported_once() {
        assert!(reached_error(false, ERROR_TEXT));
        assert!(!reached_error(true, ERROR_TEXT));
        assert!(!reached_error(false, "5"));
    }

    #[test]
    fn test_reset() {
        let mut session = Session::new();
        session.feed_script("12.5*").unwrap();
        session.reset();
        assert_eq!(session.state(), &EngineState::new());
    }

    #[test]
    fn test_bad_script_leaves_session_untouched() {
        let mut session = Session::new();
        session.feed_script("7").unwrap();
        assert!(session.feed_script("1+?").is_err());
        assert_eq!(session.state().current_input(), "7");
    }

    #[test]
    fn test_named_key_script() {
        let mut session = Session::new();
        session.feed_script("123{Backspace}{Backspace}+1{Enter}").unwrap();
        assert_eq!(session.display(), "2");
    }
}
