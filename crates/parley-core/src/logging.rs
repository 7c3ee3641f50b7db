//! Tracing setup.
//!
//! The TUI owns the terminal, so logs go to a daily rolling file under
//! `$PARLEY_HOME/logs` instead of stderr.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable that overrides the configured level filter.
pub const LOG_ENV: &str = "PARLEY_LOG";

const LOG_FILE_PREFIX: &str = "parley.log";

/// Installs the global subscriber writing to `dir`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// lifetime of the program.
pub fn init(config: &LogConfig, dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = build_filter(config)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level filter '{}'", config.level))
}
