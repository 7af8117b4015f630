//! TUI Skirmish (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_skirmish::{core,input,term,types}`
//! and hosts the pieces that tie them together: environment configuration,
//! log setup and the game loop.

pub use tui_skirmish_core as core;
pub use tui_skirmish_input as input;
pub use tui_skirmish_term as term;
pub use tui_skirmish_types as types;

pub mod config;
pub mod logging;
pub mod screen;
pub mod session;

pub use config::Config;
pub use screen::TerminalScreen;
pub use session::{Frontend, Session, SessionEnd};
