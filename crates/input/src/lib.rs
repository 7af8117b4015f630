//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`] and provides the
//! blocking one-command-per-tick reader used by the game loop.

pub mod map;
pub mod reader;

pub use tui_skirmish_types as types;

pub use map::{command_for_key, should_quit};
pub use reader::{CommandSource, ScriptedInput, TerminalInput};
