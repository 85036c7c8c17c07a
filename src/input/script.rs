//! Key scripts: a textual form of a keypad session.
//!
//! Each non-whitespace character is one key; `{Name}` spells out a named
//! key such as `{Enter}` or `{Backspace}`. Whitespace separates nothing
//! and is skipped.

use crate::calculator::Event;
use crate::error::ScriptError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a braced key name or any single non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(r"\{([A-Za-z]+)\}|\S").unwrap();
}

/// Tokenize a key script into events.
///
/// Fails on the first key that has no binding, so a bad script never
/// applies half of its keys.
pub fn parse_script(script: &str) -> Result<Vec<Event>, ScriptError> {
    KEY_TOKEN
        .captures_iter(script)
        .map(|caps| {
            let whole = caps.get_match();
            let key = caps.get(1).map_or(whole.as_str(), |name| name.as_str());

            Event::from_key(key).ok_or_else(|| ScriptError::UnknownKey {
                key: whole.as_str().to_string(),
                offset: whole.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operator};

    fn digit(c: char) -> Event {
        Event::Digit(Digit::new(c).unwrap())
    }

    #[test]
    fn test_single_character_keys() {
        let events = parse_script("12+3=").unwrap();
        assert_eq!(
            events,
            vec![
                digit('1'),
                digit('2'),
                Event::Operator(Operator::Add),
                digit('3'),
                Event::Equals,
            ]
        );
    }

    #[test]
    fn test_named_keys() {
        let events = parse_script("9{Backspace}{Enter}{Delete}").unwrap();
        assert_eq!(
            events,
            vec![digit('9'), Event::Delete, Event::Equals, Event::Delete]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(parse_script(" 2 * 4 \n= ").unwrap().len(), 4);
        assert!(parse_script("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_script("1 + x"),
            Err(ScriptError::UnknownKey {
                key: "x".to_string(),
                offset: 4,
            })
        );
    }

    #[test]
    fn test_unknown_named_key() {
        assert_eq!(
            parse_script("1{Escape}"),
            Err(ScriptError::UnknownKey {
                key: "{Escape}".to_string(),
                offset: 1,
            })
        );
    }

    #[test]
    fn test_unclosed_brace() {
        let err = parse_script("{Enter").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownKey {
                key: "{".to_string(),
                offset: 0,
            }
        );
    }
}
