//! Snapshot module - render-ready copy of a game between turns

use arrayvec::ArrayVec;

use crate::actor::Actor;
use crate::game::{Phase, TurnLog};
use crate::grid;
use crate::types::MAX_ENEMY_COUNT;

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub player: Actor,
    pub enemies: ArrayVec<Actor, MAX_ENEMY_COUNT>,
    pub events: TurnLog,
    pub phase: Phase,
    pub turn: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn live_enemies(&self) -> impl Iterator<Item = &Actor> {
        self.enemies.iter().filter(|e| e.is_alive())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            player: Actor::player(grid::center()),
            enemies: ArrayVec::new(),
            events: TurnLog::new(),
            phase: Phase::Running,
            turn: 0,
            seed: 0,
        }
    }
}
