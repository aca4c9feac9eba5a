//! Structured logging setup for the `resourceful-gen` binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host application. The CLI installs one here, writing to stderr so
//! the route table on stdout stays machine readable.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_LEVEL_ENV_VAR: &str = "RESOURCEFUL_LOG_LEVEL";
pub const LOG_FORMAT_ENV_VAR: &str = "RESOURCEFUL_LOG_FORMAT";

/// Log format: JSON for log shippers, pretty-print for terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Read `RESOURCEFUL_LOG_LEVEL` and `RESOURCEFUL_LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(LOG_LEVEL_ENV_VAR).ok().as_deref(),
            env::var(LOG_FORMAT_ENV_VAR).ok().as_deref(),
        )
    }

    fn from_vars(level: Option<&str>, format: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: level
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map_or(defaults.log_level, str::to_string),
            format: format.map_or(defaults.format, LogFormat::parse),
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
