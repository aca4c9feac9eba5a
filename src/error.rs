use std::fmt;

/// Route declaration error
///
/// Raised while a resource's route table is being constructed. A malformed
/// declaration is a programming error: callers are expected to abort startup
/// rather than recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcefulError {
    /// The resource identifier or one of its options cannot be normalized
    ///
    /// Covers an empty identifier and a `formats` value that is not a
    /// pipe-delimited list (or explicit set) of plain extensions.
    InvalidOptions {
        /// The resource identifier as supplied by the caller
        identifier: String,
        /// What was wrong with it
        reason: String,
    },
    /// The `mode` option names none of `strict`, `moderate`, `permissive`, `fuzzy`
    InvalidMode {
        /// The unrecognized mode string
        value: String,
    },
}

impl ResourcefulError {
    pub(crate) fn invalid_options(identifier: &str, reason: impl Into<String>) -> Self {
        ResourcefulError::InvalidOptions {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ResourcefulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourcefulError::InvalidOptions { identifier, reason } => {
                write!(
                    f,
                    "Invalid resource options for '{}': {}",
                    identifier, reason
                )
            }
            ResourcefulError::InvalidMode { value } => {
                write!(
                    f,
                    "Invalid routing mode '{}'. \
                    Expected one of: strict, moderate, permissive, fuzzy",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ResourcefulError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ResourcefulError>;
