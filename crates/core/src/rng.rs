//! RNG module - the single random source of a game
//!
//! Wraps a seeded [`StdRng`] so that every roll in a game (spawn cells, enemy
//! steps, damage) comes from one generator. Same seed, same game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH, MAX_DAMAGE, MIN_DAMAGE};

#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: StdRng,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform step in {-1, 0, 1}
    pub fn step(&mut self) -> i32 {
        self.inner.gen_range(-1..=1)
    }

    /// Uniform damage roll in `[MIN_DAMAGE, MAX_DAMAGE]`
    pub fn damage(&mut self) -> i32 {
        self.inner.gen_range(MIN_DAMAGE..=MAX_DAMAGE)
    }

    /// Uniform cell anywhere on the grid
    pub fn cell(&mut self) -> Position {
        Position::new(
            self.inner.gen_range(0..GRID_WIDTH),
            self.inner.gen_range(0..GRID_HEIGHT),
        )
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
