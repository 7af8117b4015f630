//! Key mapping from terminal events to commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command.
///
/// Printable keys go through [`Command::from_char`], so anything outside the
/// fixed set becomes [`Command::Invalid`]. Enter, Tab, Backspace and Esc are
/// invalid commands too. Keys that produce no character (arrows, function
/// keys) are ignored and return `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(ch) => Some(Command::from_char(ch)),
        KeyCode::Enter => Some(Command::Invalid('\n')),
        KeyCode::Tab => Some(Command::Invalid('\t')),
        KeyCode::Backspace => Some(Command::Invalid('\u{8}')),
        KeyCode::Esc => Some(Command::Invalid('\u{1b}')),
        _ => None,
    }
}

/// Ctrl-C quits too; raw mode swallows the signal.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
