//! Conversion from terminal key events to calculator commands.

use crate::calculator::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the interactive keypad should do with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Feed an event to the engine.
    Input(Event),
    /// Copy the display to the clipboard.
    Copy,
    /// Leave the keypad.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Name a crossterm key the way [`Event::from_key`] expects it.
fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Delete => Some("Delete".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        _ => None,
    }
}

/// Convert a crossterm key event into a [`Command`].
///
/// Only presses count; repeats and releases are ignored.
pub fn convert_key_event(event: KeyEvent) -> Command {
    if event.kind != KeyEventKind::Press {
        return Command::Ignore;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Command::Quit,
            _ => Command::Ignore,
        };
    }

    match event.code {
        KeyCode::Esc | KeyCode::Char('q') => return Command::Quit,
        KeyCode::Char('y') => return Command::Copy,
        _ => {}
    }

    key_name(event.code)
        .and_then(|name| Event::from_key(&name))
        .map_or(Command::Ignore, Command::Input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operator};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_keypad_chars() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('4'), KeyModifiers::empty())),
            Command::Input(Event::Digit(Digit::new('4').unwrap()))
        );
        // '*' and '+' arrive with SHIFT on most layouts
        assert_eq!(
            convert_key_event(press(KeyCode::Char('*'), KeyModifiers::SHIFT)),
            Command::Input(Event::Operator(Operator::Multiply))
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Command::Input(Event::Clear)
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            convert_key_event(press(KeyCode::Enter, KeyModifiers::empty())),
            Command::Input(Event::Equals)
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Backspace, KeyModifiers::empty())),
            Command::Input(Event::Delete)
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Delete, KeyModifiers::empty())),
            Command::Input(Event::Delete)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            convert_key_event(press(KeyCode::Esc, KeyModifiers::empty())),
            Command::Quit
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('q'), KeyModifiers::empty())),
            Command::Quit
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Char('y'), KeyModifiers::empty())),
            Command::Copy
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(KeyCode::Char('1'), KeyModifiers::empty());
        event.kind = KeyEventKind::Release;
        assert_eq!(convert_key_event(event), Command::Ignore);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(
            convert_key_event(press(KeyCode::Char('x'), KeyModifiers::empty())),
            Command::Ignore
        );
        assert_eq!(
            convert_key_event(press(KeyCode::Up, KeyModifiers::empty())),
            Command::Ignore
        );
    }
}
