// SPDX-License-Identifier: MIT
//
// Logging setup for the palette-studio binary.
//
// Library crates only emit `tracing` events. This module installs the one
// subscriber, writing to stderr so stdout stays clean for palette output
// that may be piped into a file.
//
// Level resolution, highest priority first:
//
//   RUST_LOG               → full EnvFilter directive syntax
//   -v / -vv / -vvv        → info / debug / trace
//   [log] level in config  → default "warn"

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, colored when stderr is a terminal.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        })
    }
}

/// The `[log]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (trace, debug, info,
    /// warn, error, or any `EnvFilter` directive).
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), format: LogFormat::Pretty }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log filter {0:?}: {1}")]
    InvalidFilter(String, #[source] tracing_subscriber::filter::ParseError),

    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

impl LogConfig {
    /// Apply `-v` flags and a `--log-format` override on top of the file.
    #[must_use]
    pub fn with_overrides(mut self, verbose: u8, format: Option<LogFormat>) -> Self {
        if let Some(level) = verbosity_level(verbose) {
            level.clone_into(&mut self.level);
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// The filter this config resolves to, `RUST_LOG` taking precedence.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidFilter`] if the configured level is not a
    /// valid directive.
    pub fn filter(&self) -> Result<EnvFilter, LogError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|e| LogError::InvalidFilter(self.level.clone(), e))
    }
}

/// Level for a repeated `-v` flag, or `None` to keep the configured level.
#[must_use]
pub const fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the global subscriber. Call once, before any command runs.
///
/// # Errors
///
/// Fails on an invalid filter directive or if a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    let filter = config.filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(tfmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(tfmt::layer().json().with_writer(std::io::stderr).with_current_span(false))
            .try_init()?,
    }

    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
