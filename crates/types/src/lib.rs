//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the core rules, the terminal renderer and the input layer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 8 rows (indexed 0-7)
//! - **Player spawn**: grid center, (6, 4)
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_HEALTH` | 100 | Starting player health |
//! | `ENEMY_HEALTH` | 50 | Starting enemy health |
//! | `MIN_DAMAGE`..`MAX_DAMAGE` | 1..=10 | Uniform damage roll per attack |
//! | `DEFAULT_ENEMY_COUNT` | 2 | Enemies spawned at startup |
//! | `TICK_DELAY_MS` | 500 | Delay at the end of every tick |
//! | `INVALID_PAUSE_MS` | 1000 | Extra pause after an unknown command |
//!
//! # Examples
//!
//! ```
//! use tui_skirmish_types::{Command, Direction, Position, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(Command::from_char('w'), Command::Move(Direction::Up));
//! assert_eq!(Command::from_char(' '), Command::Attack);
//! assert_eq!(Command::from_char('x'), Command::Invalid('x'));
//!
//! let a = Position::new(6, 4);
//! assert_eq!(a.chebyshev(Position::new(7, 3)), 1);
//!
//! assert_eq!(GRID_WIDTH, 12);
//! assert_eq!(GRID_HEIGHT, 8);
//! ```

use std::fmt;

/// Grid width in cells (12 columns)
pub const GRID_WIDTH: i32 = 12;

/// Grid height in cells (8 rows)
pub const GRID_HEIGHT: i32 = 8;

/// Starting health of the player
pub const PLAYER_HEALTH: i32 = 100;

/// Starting health of every enemy
pub const ENEMY_HEALTH: i32 = 50;

/// Smallest damage a single attack can deal
pub const MIN_DAMAGE: i32 = 1;

/// Largest damage a single attack can deal
pub const MAX_DAMAGE: i32 = 10;

/// Number of enemies spawned when nothing else is configured
pub const DEFAULT_ENEMY_COUNT: usize = 2;

/// Upper bound on the configurable enemy count
pub const MAX_ENEMY_COUNT: usize = 16;

/// Delay at the end of each tick in milliseconds
pub const TICK_DELAY_MS: u64 = 500;

/// Pause after an invalid command in milliseconds
pub const INVALID_PAUSE_MS: u64 = 1000;

/// Glyph used for the play area border
pub const BORDER_GLYPH: char = '+';

/// Glyph used for the player
pub const PLAYER_GLYPH: char = '☺';

/// Glyph used for live enemies
pub const ENEMY_GLYPH: char = '☠';

/// Prompt shown under the board while waiting for a command
pub const PROMPT: &str = "Enter a move (w/a/s/d), space to attack, q to quit: ";

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that candidate positions produced by a move can
/// be represented (and rejected) before they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`; no bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (king-move) distance between two positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_skirmish_types::Position;
    ///
    /// let p = Position::new(6, 4);
    /// assert_eq!(p.chebyshev(p), 0);
    /// assert_eq!(p.chebyshev(Position::new(5, 5)), 1);
    /// assert_eq!(p.chebyshev(Position::new(8, 4)), 2);
    /// ```
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// One-cell movement directions available to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta for one step in this direction. `y` grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Commands the operator can issue, one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the player one cell
    Move(Direction),
    /// Attack every enemy within Chebyshev distance 1
    Attack,
    /// End the game
    Quit,
    /// Anything outside the fixed command set
    Invalid(char),
}

impl Command {
    /// Map a typed character to a command.
    ///
    /// The command set is fixed and case-sensitive: `w`, `a`, `s`, `d`,
    /// space and `q`. Everything else is [`Command::Invalid`].
    pub fn from_char(ch: char) -> Self {
        match ch {
            'w' => Command::Move(Direction::Up),
            'a' => Command::Move(Direction::Left),
            's' => Command::Move(Direction::Down),
            'd' => Command::Move(Direction::Right),
            ' ' => Command::Attack,
            'q' => Command::Quit,
            other => Command::Invalid(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(Direction::Up) => "up",
            Command::Move(Direction::Down) => "down",
            Command::Move(Direction::Left) => "left",
            Command::Move(Direction::Right) => "right",
            Command::Attack => "attack",
            Command::Quit => "quit",
            Command::Invalid(_) => "invalid",
        }
    }
}

/// Which side an actor fights for
///
/// Attacks only land on the opposing kind; this replaces runtime type checks
/// on the attack target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
}

impl ActorKind {
    /// True if an actor of this kind may attack an actor of `target` kind.
    pub fn opposes(&self, target: ActorKind) -> bool {
        *self != target
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The operator issued the quit command
    Quit,
    /// The player's health dropped to zero or below
    PlayerDefeated,
}

impl GameOverReason {
    /// Line printed once the terminal has been restored.
    pub fn farewell(&self) -> &'static str {
        match self {
            GameOverReason::Quit => "Game Over!",
            GameOverReason::PlayerDefeated => "Player defeated! Game Over!",
        }
    }
}

/// Something that happened during a turn, shown to the operator under the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player hit one enemy
    PlayerHit { damage: i32 },
    /// An enemy's health dropped to zero or below
    EnemyDefeated,
    /// An enemy hit the player
    EnemyHit { damage: i32 },
    /// The player's health dropped to zero or below
    PlayerDefeated,
    /// The command was outside the fixed command set
    InvalidCommand(char),
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::PlayerHit { damage } => {
                write!(f, "Player attacks, dealing {damage} damage!")
            }
            TurnEvent::EnemyDefeated => f.write_str("Enemy defeated!"),
            TurnEvent::EnemyHit { damage } => {
                write!(f, "Enemy attacks player, dealing {damage} damage!")
            }
            TurnEvent::PlayerDefeated => f.write_str("Player defeated! Game Over!"),
            TurnEvent::InvalidCommand(_) => {
                f.write_str("Invalid move! Use w/a/s/d to move or space to attack.")
            }
        }
    }
}
