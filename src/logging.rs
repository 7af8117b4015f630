//! Log setup.
//!
//! The game owns stdout, so logs only go to a file. Without
//! `SKIRMISH_LOG_PATH` no logger is installed and `log` macros are no-ops.

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Install the file logger if one is configured. Returns whether it was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("installing logger")?;

    Ok(true)
}
