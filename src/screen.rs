//! Terminal-backed [`Frontend`].

use std::time::Duration;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::session::Frontend;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, FRAME_HEIGHT, FRAME_WIDTH};

pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn leave(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for TerminalScreen {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
