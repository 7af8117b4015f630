//! Terminal skirmish runner (default binary).
//!
//! Reads one key per tick, plays the turn and redraws. The terminal is always
//! restored before the closing message is printed. Quitting, dying and losing
//! the input stream all exit with status 0.

use anyhow::Result;
use log::info;

use tui_skirmish::core::Game;
use tui_skirmish::input::TerminalInput;
use tui_skirmish::{logging, Config, Session, TerminalScreen};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let seed = config.resolve_seed();
    info!("starting: seed={seed} enemies={}", config.enemies);
    let game = Game::with_enemy_count(seed, config.enemies);

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let mut session = Session::new(game, TerminalInput::new(), screen);
    let result = session.run();

    // Always try to restore terminal state.
    let _ = session.frontend_mut().leave();

    for line in result?.closing_lines() {
        println!("{line}");
    }
    Ok(())
}
