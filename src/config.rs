//! # Configuration Module
//!
//! Process-wide defaults for route declarations. [`route`](crate::route)
//! loads them from the environment on each call; [`route_with`](crate::route_with)
//! takes them through an explicit [`Normalizer`](crate::options::Normalizer).
//!
//! ## Environment Variables
//!
//! ### `RESOURCEFUL_MODE`
//!
//! Default routing mode for resources declared without an explicit `mode`
//! option. One of `strict`, `moderate`, `permissive`, `fuzzy`
//! (case-insensitive).
//!
//! Default: unset, which resolves to `fuzzy`.
//!
//! ## Usage
//!
//! ```rust
//! use resourceful::config::ResourcefulConfig;
//! use resourceful::mode::Mode;
//!
//! let config = ResourcefulConfig::from_env();
//! println!("Default mode: {}", config.default_mode());
//!
//! let strict = ResourcefulConfig::default().with_default_mode(Mode::Strict);
//! assert_eq!(strict.default_mode(), Mode::Strict);
//! ```
//!
//! The struct also deserializes, so a host service can nest it in its own
//! configuration file:
//!
//! ```yaml
//! resourceful:
//!   default_mode: moderate
//! ```

use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Environment variable holding the default routing mode
pub const MODE_ENV_VAR: &str = "RESOURCEFUL_MODE";

/// Defaults applied to every route declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcefulConfig {
    /// Mode for resources that do not set one (unset means `fuzzy`)
    pub default_mode: Option<Mode>,
}

impl ResourcefulConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognized `RESOURCEFUL_MODE` is logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_mode_var(env::var(MODE_ENV_VAR).ok().as_deref())
    }

    fn from_mode_var(value: Option<&str>) -> Self {
        let default_mode = match value {
            Some(raw) if !raw.trim().is_empty() => match raw.parse::<Mode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    warn!(
                        env_var = MODE_ENV_VAR,
                        value = %raw,
                        error = %e,
                        "Ignoring unrecognized default routing mode"
                    );
                    None
                }
            },
            _ => None,
        };
        ResourcefulConfig { default_mode }
    }

    #[must_use]
    pub fn with_default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    /// The configured default, falling back to [`Mode::Fuzzy`]
    #[must_use]
    pub fn default_mode(&self) -> Mode {
        self.default_mode.unwrap_or_default()
    }
}
