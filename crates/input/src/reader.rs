//! Blocking command sources.

use std::collections::VecDeque;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::command_for_key;
use crate::types::Command;

/// Something that yields exactly one command per call, blocking until it has one.
pub trait CommandSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Reads key presses from the terminal (raw mode expected).
///
/// Waits until a press that maps to a command arrives. Repeats, releases,
/// resizes, focus and mouse events are skipped.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl CommandSource for TerminalInput {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            let ev = event::read().context("reading command from terminal")?;
            let Event::Key(key) = ev else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = command_for_key(key) {
                return Ok(command);
            }
        }
    }
}

/// Replays a fixed list of commands, then fails like a closed input stream.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }

    /// Script typed as a string, one character per command.
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Command::from_char))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CommandSource for ScriptedInput {
    fn next_command(&mut self) -> Result<Command> {
        match self.queue.pop_front() {
            Some(command) => Ok(command),
            None => bail!("end of input"),
        }
    }
}
