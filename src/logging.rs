//! Tracing subscriber setup
//!
//! The level comes from `WORDY_LOG_LEVEL` (e.g. `debug`, `wordy=trace`).

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "WORDY_LOG_LEVEL";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// Dropped; stderr would draw over the TUI
    Discard,
}

impl LogTarget {
    /// An explicit log file wins; otherwise stderr unless the TUI owns the terminal
    #[must_use]
    pub fn select(log_file: Option<&Path>, tui: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if tui => Self::Discard,
            None => Self::Stderr,
        }
    }
}

fn env_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_env(LOG_LEVEL_ENV)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_tracing(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter()?);

    let result = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!(e))
}
