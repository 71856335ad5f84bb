//! Error types for lazyconf.

/// Result type alias for lazyconf operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when reading configuration.
///
/// Absent values are not errors for the plain accessors; this type only shows up
/// where a caller asked for a value that must be present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required key is unset or empty.
    #[error("{key} configuration value not set")]
    MissingKey {
        /// The key that was looked up
        key: String,
    },
}

impl ConfigError {
    /// Create a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// The key this error is about.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } => key,
        }
    }
}
