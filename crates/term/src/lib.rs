//! Terminal rendering module.
//!
//! The board is drawn into a framebuffer by the pure [`GameView`] and then
//! flushed by [`TerminalRenderer`], which owns raw mode and the alternate
//! screen. Keeping the view pure lets the layout be tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_skirmish_core as core;
pub use tui_skirmish_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{grid_to_screen, GameView, Viewport, FRAME_HEIGHT, FRAME_WIDTH};
pub use renderer::{encode_full_into, TerminalRenderer};
