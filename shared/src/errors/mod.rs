//! Shared error types

use thiserror::Error;

/// Errors raised while loading process configuration
///
/// Configuration defects are deployment problems and must surface to the
/// operator instead of being papered over with defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    /// Create a missing-variable error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Create an invalid-value error
    pub fn invalid(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
        }
    }
}
