//! Interactive keypad on the terminal.
//!
//! Draws a single display line and feeds key presses to the session until
//! the user quits.

use crate::calculator::{EngineState, Event, copy_to_clipboard, format_number};
use crate::config::Config;
use crate::input::{Command, convert_key_event};
use crate::session::Session;
use anyhow::{Context, Result};
use crossterm::cursor::MoveToColumn;
use crossterm::event::{Event as TerminalEvent, read};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{Write, stdout};

/// Puts the terminal in raw mode and restores it on drop, including when
/// the loop exits through an error.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
        let _ = execute!(stdout(), Print("\r\n"));
    }
}

/// Text shown next to the display for a pending operation, e.g. `[5 +]`.
fn pending_hint(state: &EngineState) -> Option<String> {
    state
        .pending()
        .map(|p| format!("[{} {}]", format_number(p.value), p.operator))
}

fn render(out: &mut impl Write, session: &Session, config: &Config) -> Result<()> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(&config.display.prompt),
        Print(session.display().bold())
    )?;

    if config.display.show_pending
        && let Some(hint) = pending_hint(session.state())
    {
        queue!(out, Print("  "), Print(hint.dim()))?;
    }

    out.flush()?;
    Ok(())
}

fn copy_display(text: &str) {
    if let Err(e) = copy_to_clipboard(text) {
        let cause = std::error::Error::source(&e)
            .map(|source| source.to_string())
            .unwrap_or_default();
        tracing::warn!(cause = %cause, "{}", e);
    }
}

/// Run the keypad until Esc, `q` or Ctrl+C.
pub fn run(config: &Config) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    let mut out = stdout();
    let mut session = Session::new();

    tracing::info!("keypad started");
    render(&mut out, &session, config)?;

    loop {
        let TerminalEvent::Key(key) = read().context("Failed to read terminal event")? else {
            continue;
        };

        match convert_key_event(key) {
            Command::Input(event) => {
                let had_pending = session.state().pending().is_some();
                session.dispatch(event);

                let resolved = event == Event::Equals && had_pending;
                if resolved && config.clipboard.copy_on_equals && !session.state().is_error() {
                    copy_display(session.display());
                }
            }
            Command::Copy => copy_display(session.display()),
            Command::Quit => break,
            Command::Ignore => continue,
        }

        render(&mut out, &session, config)?;
    }

    tracing::info!("keypad closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_hint() {
        let mut session = Session::new();
        assert_eq!(pending_hint(session.state()), None);

        session.feed_script("2+3*").unwrap();
        assert_eq!(pending_hint(session.state()).as_deref(), Some("[5 *]"));
    }

    #[test]
    fn test_render_line() {
        let mut session = Session::new();
        session.feed_script("12").unwrap();

        let config = Config::default();
        let mut buf = Vec::new();
        render(&mut buf, &session, &config).unwrap();

        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("> "));
        assert!(text.contains("12"));
    }
}
