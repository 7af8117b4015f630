//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, zero-based from the top-left corner of the terminal:
//!
//! ```text
//! row 0           ++++++++++++++     border, 14 columns wide
//! rows 1..=8      +   ☠   ☺    +     grid (x, y) at column x + 1, row y + 1
//! row 9           ++++++++++++++
//! row 10          HP 100  Enemies 2/2  Turn 0
//! rows 11..       events of the last turn, one per line
//! last            prompt
//! ```

use crate::core::{Actor, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Position, BORDER_GLYPH, ENEMY_GLYPH, GRID_HEIGHT, GRID_WIDTH, PLAYER_GLYPH, PROMPT,
};

/// Width of the bordered play area in terminal columns.
pub const FRAME_WIDTH: u16 = GRID_WIDTH as u16 + 2;

/// Height of the bordered play area in terminal rows.
pub const FRAME_HEIGHT: u16 = GRID_HEIGHT as u16 + 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Stateless renderer for the skirmish board.
#[derive(Debug, Clone)]
pub struct GameView {
    border: CellStyle,
    player: CellStyle,
    enemy: CellStyle,
    text: CellStyle,
    /// Draw the HP/enemies/turn line and the event log under the board.
    show_status: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            border: CellStyle::colored(Rgb::new(200, 200, 200)),
            player: CellStyle::colored(Rgb::new(120, 220, 120)).bold(),
            enemy: CellStyle::colored(Rgb::new(220, 80, 80)).bold(),
            text: CellStyle::default(),
            show_status: true,
        }
    }
}

impl GameView {
    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        self.draw_border(fb);

        // Defeated enemies are skipped; the player is drawn last so it wins a
        // shared cell.
        for enemy in snap.live_enemies() {
            self.draw_actor(fb, enemy, ENEMY_GLYPH, self.enemy);
        }
        self.draw_actor(fb, &snap.player, PLAYER_GLYPH, self.player);

        let mut y = FRAME_HEIGHT;
        if self.show_status {
            y = self.draw_status(fb, snap, y);
        }
        fb.put_str(0, y, PROMPT, self.text);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer) {
        for x in 0..FRAME_WIDTH {
            fb.put_char(x, 0, BORDER_GLYPH, self.border);
            fb.put_char(x, FRAME_HEIGHT - 1, BORDER_GLYPH, self.border);
        }
        for y in 1..FRAME_HEIGHT - 1 {
            fb.put_char(0, y, BORDER_GLYPH, self.border);
            fb.put_char(FRAME_WIDTH - 1, y, BORDER_GLYPH, self.border);
        }
    }

    fn draw_actor(&self, fb: &mut FrameBuffer, actor: &Actor, glyph: char, style: CellStyle) {
        if let Some((x, y)) = grid_to_screen(actor.pos()) {
            fb.put_char(x, y, glyph, style);
        }
    }

    /// Returns the row after the last line written.
    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, mut y: u16) -> u16 {
        let status = format!(
            "HP {}  Enemies {}/{}  Turn {}",
            snap.player.health().max(0),
            snap.live_enemies().count(),
            snap.enemies.len(),
            snap.turn
        );
        fb.put_str(0, y, &status, self.text.bold());
        y = y.saturating_add(1);

        for event in &snap.events {
            fb.put_str(0, y, &event.to_string(), self.text);
            y = y.saturating_add(1);
        }
        y
    }
}

/// Screen cell for a grid position, or `None` when the position is off the grid.
pub fn grid_to_screen(pos: Position) -> Option<(u16, u16)> {
    if !crate::core::in_bounds(pos.x, pos.y) {
        return None;
    }
    Some((pos.x as u16 + 1, pos.y as u16 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_origin_sits_inside_border() {
        assert_eq!(grid_to_screen(Position::new(0, 0)), Some((1, 1)));
        assert_eq!(
            grid_to_screen(Position::new(GRID_WIDTH - 1, GRID_HEIGHT - 1)),
            Some((FRAME_WIDTH - 2, FRAME_HEIGHT - 2))
        );
    }

    #[test]
    fn off_grid_positions_have_no_screen_cell() {
        assert_eq!(grid_to_screen(Position::new(-1, 0)), None);
        assert_eq!(grid_to_screen(Position::new(0, GRID_HEIGHT)), None);
    }

    #[test]
    fn prompt_follows_border_without_status() {
        let view = GameView::default().with_status(false);
        let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));
        assert_eq!(fb.row_text(FRAME_HEIGHT), PROMPT.trim_end());
    }
}
