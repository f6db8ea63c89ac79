//! Event handling for the TUI.
//!
//! Provides keyboard event polling and handling.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::TuiResult;

/// Poll for keyboard events with a timeout.
///
/// Returns `Some(KeyEvent)` if a key was pressed within the timeout,
/// or `None` if no key was pressed.
pub fn poll_key(timeout: Duration) -> TuiResult<Option<KeyEvent>> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(Some(key));
    }
    Ok(None)
}

/// Check if the key event represents a quit command.
///
/// Returns `true` for 'q' key or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Check if the key event is the down navigation key (j or Down arrow).
pub fn is_down(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Down,
            ..
        }
    )
}

/// Check if the key event is the up navigation key (k or Up arrow).
pub fn is_up(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Up,
            ..
        }
    )
}

/// Check if the key event is the Enter key.
pub fn is_enter(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        }
    )
}

/// Check if the key event is the Escape key.
pub fn is_esc(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc,
            ..
        }
    )
}

/// Check if the key event is the Backspace key.
pub fn is_backspace(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        }
    )
}

/// Extract a plain character from the key event, if any.
///
/// Returns `None` for control-modified keys so shortcuts like Ctrl+C are
/// never treated as text input.
pub fn char_input(key: &KeyEvent) -> Option<char> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}
