//! The game loop.
//!
//! One tick: block for one command, play the turn, draw the result, then
//! wait. The first frame is drawn before the first read. Quit and player
//! defeat end the loop without another frame; the final turn's events travel
//! in [`SessionEnd::GameOver`] so they can be printed once the terminal is
//! back. A failed read also ends the loop, reported as
//! [`SessionEnd::InputFailed`] rather than an error.

use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use crate::core::{Game, GameSnapshot, Phase, TurnLog};
use crate::input::CommandSource;
use crate::types::{Command, GameOverReason, TurnEvent, INVALID_PAUSE_MS, TICK_DELAY_MS};

/// Where frames go and how the loop waits.
pub trait Frontend {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()>;
    fn pause(&mut self, duration: Duration);
}

/// How a session finished.
#[derive(Debug)]
pub enum SessionEnd {
    GameOver {
        reason: GameOverReason,
        /// Events of the turn that ended the game
        events: TurnLog,
    },
    InputFailed(anyhow::Error),
}

impl SessionEnd {
    /// Lines to print after the terminal is restored.
    ///
    /// On game over these are the last turn's events followed by the
    /// farewell. The player's defeat event reads the same as the farewell, so
    /// it is not repeated.
    pub fn closing_lines(&self) -> Vec<String> {
        match self {
            SessionEnd::GameOver { reason, events } => events
                .iter()
                .filter(|event| **event != TurnEvent::PlayerDefeated)
                .map(ToString::to_string)
                .chain(std::iter::once(reason.farewell().to_string()))
                .collect(),
            SessionEnd::InputFailed(err) => vec![format!("Error reading input: {err:#}")],
        }
    }
}

pub struct Session<I, F> {
    game: Game,
    input: I,
    frontend: F,
    snapshot: GameSnapshot,
    tick_delay: Duration,
    invalid_pause: Duration,
}

impl<I: CommandSource, F: Frontend> Session<I, F> {
    pub fn new(game: Game, input: I, frontend: F) -> Self {
        Self {
            game,
            input,
            frontend,
            snapshot: GameSnapshot::default(),
            tick_delay: Duration::from_millis(TICK_DELAY_MS),
            invalid_pause: Duration::from_millis(INVALID_PAUSE_MS),
        }
    }

    pub fn with_delays(mut self, tick_delay: Duration, invalid_pause: Duration) -> Self {
        self.tick_delay = tick_delay;
        self.invalid_pause = invalid_pause;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Run ticks until the game ends or input fails.
    ///
    /// Only frontend draw failures are returned as `Err`.
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("session started (seed {})", self.game.seed());
        self.redraw()?;
        loop {
            let command = match self.input.next_command() {
                Ok(command) => command,
                Err(err) => {
                    warn!("input failed after {} turns: {err:#}", self.game.turn());
                    return Ok(SessionEnd::InputFailed(err));
                }
            };

            if let Phase::GameOver(reason) = self.game.step(command) {
                info!("game over after {} turns: {:?}", self.game.turn(), reason);
                let events = self.game.events().iter().copied().collect();
                return Ok(SessionEnd::GameOver { reason, events });
            }

            // The invalid-move notice is on screen before the pause.
            self.redraw()?;
            if let Command::Invalid(_) = command {
                self.frontend.pause(self.invalid_pause);
            }
            self.frontend.pause(self.tick_delay);
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.game.snapshot_into(&mut self.snapshot);
        self.frontend.draw(&self.snapshot)
    }
}
