//! Grid module - the playable rectangle
//!
//! The grid is 12 columns x 8 rows. Coordinates are (x, y) where x ranges 0..11
//! (left to right) and y ranges 0..7 (top to bottom). Every movement goes through
//! [`in_bounds`]; nothing else defines where an actor may stand.

use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH};

/// True iff `(x, y)` lies inside the grid.
#[inline(always)]
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..GRID_WIDTH).contains(&x) && (0..GRID_HEIGHT).contains(&y)
}

/// [`in_bounds`] for a [`Position`].
#[inline(always)]
pub fn contains(pos: Position) -> bool {
    in_bounds(pos.x, pos.y)
}

/// Player spawn cell.
pub fn center() -> Position {
    Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
}
