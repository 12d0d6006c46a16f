//! Minimal stderr backend for the `log` facade

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

use crate::io::error::{GenerationError, Result};

/// Writes `LEVEL target: message` lines to stderr
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Create a logger passing records up to `level`
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let mut stderr = std::io::stderr().lock();
        // Logging must never fail the caller
        let _ = writeln!(stderr, "{label} {}: {}", record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Level filter for a verbosity count, quiet overriding everything
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger as the global `log` backend
///
/// # Errors
///
/// Returns an error if a logger is already installed; the existing logger and
/// level are left untouched.
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))
        .map_err(|source| GenerationError::LoggerInstall { source })?;
    log::set_max_level(level);
    Ok(())
}
