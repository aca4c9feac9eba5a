//! # Routing Modes
//!
//! A mode is a named strictness policy for a resource's route table. It
//! decides whether trailing-slash variants are registered, which status code
//! redirects them to the canonical path, and whether tolerant aliases such as
//! `{id}/destroy` and `new` are added.
//!
//! | mode | preserve slashes | redirect | fuzzy aliases |
//! |---|---|---|---|
//! | `strict` | no | none | no |
//! | `moderate` | yes | 301 | no |
//! | `permissive` | yes | 302 | no |
//! | `fuzzy` | yes | 302 | yes |

use crate::error::ResourcefulError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Routing strictness for one resource level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Canonical rules only
    Strict,
    /// Trailing slashes redirect permanently (301)
    Moderate,
    /// Trailing slashes redirect temporarily (302)
    Permissive,
    /// Everything `permissive` does plus tolerant aliases
    #[default]
    Fuzzy,
}

/// Behavior switches derived from a [`Mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicy {
    /// Register trailing-slash variants of the canonical paths
    pub preserve_slashes: bool,
    /// Status code used for trailing-slash redirects, if any
    pub redirect_code: Option<u16>,
    /// Register tolerant aliases beyond the canonical set
    pub fuzzy_matching: bool,
}

const STRICT: ModePolicy = ModePolicy {
    preserve_slashes: false,
    redirect_code: None,
    fuzzy_matching: false,
};

const MODERATE: ModePolicy = ModePolicy {
    preserve_slashes: true,
    redirect_code: Some(301),
    fuzzy_matching: false,
};

const PERMISSIVE: ModePolicy = ModePolicy {
    preserve_slashes: true,
    redirect_code: Some(302),
    fuzzy_matching: false,
};

const FUZZY: ModePolicy = ModePolicy {
    preserve_slashes: true,
    redirect_code: Some(302),
    fuzzy_matching: true,
};

impl Mode {
    /// All modes, in increasing order of tolerance
    pub const ALL: [Mode; 4] = [Mode::Strict, Mode::Moderate, Mode::Permissive, Mode::Fuzzy];

    /// Policy record for this mode
    #[inline]
    #[must_use]
    pub const fn policy(self) -> ModePolicy {
        match self {
            Mode::Strict => STRICT,
            Mode::Moderate => MODERATE,
            Mode::Permissive => PERMISSIVE,
            Mode::Fuzzy => FUZZY,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Moderate => "moderate",
            Mode::Permissive => "permissive",
            Mode::Fuzzy => "fuzzy",
        }
    }
}

/// Policy lookup for a mode
#[inline]
#[must_use]
pub const fn policy_for(mode: Mode) -> ModePolicy {
    mode.policy()
}

impl FromStr for Mode {
    type Err = ResourcefulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "moderate" => Ok(Mode::Moderate),
            "permissive" => Ok(Mode::Permissive),
            "fuzzy" => Ok(Mode::Fuzzy),
            _ => Err(ResourcefulError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
