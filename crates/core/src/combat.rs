//! Combat module - damage rolls and defeat resolution
//!
//! Attacks are kind-checked: a player only hits enemies and an enemy only hits
//! the player. A rejected attack is a no-op that returns `None`.

use crate::actor::Actor;
use crate::rng::GameRng;
use crate::types::ActorKind;

/// Outcome of one landed attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub attacker: ActorKind,
    pub damage: i32,
    /// Target health after the hit (may be negative)
    pub remaining: i32,
    /// True only for the hit that took the target to zero or below
    pub defeated: bool,
}

impl Actor {
    /// Attack `target` for a random `[1, 10]` damage.
    ///
    /// Returns `None` without rolling when the target is the same kind as the
    /// attacker, or when either side is already defeated.
    pub fn attack(&self, target: &mut Actor, rng: &mut GameRng) -> Option<Hit> {
        if !self.kind().opposes(target.kind()) || self.is_defeated() || target.is_defeated() {
            return None;
        }

        let damage = rng.damage();
        let defeated = target.take_damage(damage);
        Some(Hit {
            attacker: self.kind(),
            damage,
            remaining: target.health(),
            defeated,
        })
    }
}
