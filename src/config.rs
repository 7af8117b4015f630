//! Runtime configuration read from the environment.
//!
//! Every variable is optional and parsed leniently: a missing or malformed
//! value falls back to its default.
//!
//! - `SKIRMISH_SEED`: RNG seed (u64). Defaults to one derived from the clock.
//! - `SKIRMISH_ENEMIES`: enemy count, clamped to `0..=MAX_ENEMY_COUNT` (default 2).
//! - `SKIRMISH_LOG_PATH`: append logs to this file. Unset means no logging.
//! - `SKIRMISH_LOG`: `env_logger` filter string (default `info`).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_ENEMY_COUNT, MAX_ENEMY_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub enemies: usize,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            enemies: DEFAULT_ENEMY_COUNT,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("SKIRMISH_SEED").and_then(|s| s.trim().parse().ok());

        let enemies = lookup("SKIRMISH_ENEMIES")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(|n| n.min(MAX_ENEMY_COUNT))
            .unwrap_or(defaults.enemies);

        let log_path = lookup("SKIRMISH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("SKIRMISH_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            seed,
            enemies,
            log_path,
            log_filter,
        }
    }

    /// Configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}
