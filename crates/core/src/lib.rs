//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the skirmish: the grid, actors, combat and
//! turn sequencing. It has **no dependencies** on the terminal or on process
//! lifecycle, making it:
//!
//! - **Deterministic**: one seeded RNG per game, so the same seed and the same
//!   commands produce the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Side-effect free**: player defeat is a state transition, not an exit
//!
//! # Module Structure
//!
//! - [`grid`]: 12x8 playable rectangle and bounds checking
//! - [`actor`]: position/health shared by the player and enemies, movement
//! - [`combat`]: kind-checked attacks, damage rolls and defeat resolution
//! - [`rng`]: the seeded random source
//! - [`game`]: turn sequencing and the `Running`/`GameOver` state machine
//! - [`snapshot`]: render-ready copy of the game
//!
//! # Game Rules
//!
//! - The player starts at the grid center with 100 health
//! - Enemies start at random cells with 50 health
//! - Every attack deals a uniform 1..=10 damage
//! - The player's attack hits every enemy within Chebyshev distance 1
//! - After each player command, every live enemy takes a random king step
//!   (dropped if it would leave the grid) and then hits the player, wherever
//!   it stands
//!
//! # Example
//!
//! ```
//! use tui_skirmish_core::{Game, Phase};
//! use tui_skirmish_types::{Command, Direction, GameOverReason};
//!
//! let mut game = Game::new(12345);
//! game.step(Command::Move(Direction::Left));
//! game.step(Command::Attack);
//! assert_eq!(game.turn(), 2);
//!
//! let phase = game.step(Command::Quit);
//! assert_eq!(phase, Phase::GameOver(GameOverReason::Quit));
//! ```

pub mod actor;
pub mod combat;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_skirmish_types as types;

// Re-export commonly used types for convenience
pub use actor::Actor;
pub use combat::Hit;
pub use game::{Game, Phase, TurnLog, MAX_TURN_EVENTS};
pub use grid::in_bounds;
pub use rng::GameRng;
pub use snapshot::GameSnapshot;
