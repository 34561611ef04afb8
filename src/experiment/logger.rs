//! Per-call logger gated by the experiment's debug flag.

use std::fmt;

use crate::config;

/// `tracing` target for every event emitted by the engine.
pub const LOG_TARGET: &str = "split_testing";

/// Leveled logger for one resolution call.
///
/// Info and debug events are only emitted when debug is enabled. Warnings and
/// errors are always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    debug: bool,
}

impl Logger {
    /// Create a logger with an explicit debug state.
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Use `flag` when set, else the process-wide default from [`config`].
    #[must_use]
    pub fn from_flag(flag: Option<bool>) -> Self {
        Self::new(flag.unwrap_or_else(config::default_debug))
    }

    /// Whether debug events are emitted.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    /// Emit an info event when debugging.
    pub fn info(&self, message: fmt::Arguments<'_>) {
        if self.debug {
            tracing::info!(target: LOG_TARGET, "{message}");
        }
    }

    /// Emit a debug event when debugging.
    pub fn debug(&self, message: fmt::Arguments<'_>) {
        if self.debug {
            tracing::debug!(target: LOG_TARGET, "{message}");
        }
    }

    /// Emit a warning.
    pub fn warn(&self, message: fmt::Arguments<'_>) {
        tracing::warn!(target: LOG_TARGET, "{message}");
    }

    /// Emit an error.
    pub fn error(&self, message: fmt::Arguments<'_>) {
        tracing::error!(target: LOG_TARGET, "{message}");
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_flag(None)
    }
}
