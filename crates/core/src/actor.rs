//! Actor module - position and health shared by the player and enemies
//!
//! An [`Actor`] is tagged with its [`ActorKind`]; the kind decides who it may
//! attack (see [`crate::combat`]). Defeated actors stay in place with their
//! `defeated` flag set and never move again.

use crate::grid;
use crate::rng::GameRng;
use crate::types::{ActorKind, Position, ENEMY_HEALTH, PLAYER_HEALTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    kind: ActorKind,
    pos: Position,
    health: i32,
    defeated: bool,
}

impl Actor {
    /// Player at `pos` with full health
    pub fn player(pos: Position) -> Self {
        Self::new(ActorKind::Player, pos, PLAYER_HEALTH)
    }

    /// Enemy at `pos` with full health
    pub fn enemy(pos: Position) -> Self {
        Self::new(ActorKind::Enemy, pos, ENEMY_HEALTH)
    }

    pub fn new(kind: ActorKind, pos: Position, health: i32) -> Self {
        Self {
            kind,
            pos,
            health,
            defeated: false,
        }
    }

    /// Same actor with a different starting health
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn is_alive(&self) -> bool {
        !self.defeated
    }

    /// Move by `(dx, dy)` if the target cell is on the grid.
    ///
    /// Returns `false` (and leaves the actor where it is) when the move would
    /// leave the grid or the actor is defeated.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.defeated {
            return false;
        }
        let next = self.pos.offset(dx, dy);
        if !grid::contains(next) {
            return false;
        }
        self.pos = next;
        true
    }

    /// Take one uniformly random king step (including standing still).
    ///
    /// dx and dy are drawn independently from {-1, 0, 1}. A step that would
    /// leave the grid is dropped, not re-rolled.
    pub fn move_randomly(&mut self, rng: &mut GameRng) -> bool {
        let dx = rng.step();
        let dy = rng.step();
        self.try_move(dx, dy)
    }

    pub(crate) fn take_damage(&mut self, damage: i32) -> bool {
        self.health -= damage;
        if self.health <= 0 && !self.defeated {
            self.defeated = true;
            return true;
        }
        false
    }
}
