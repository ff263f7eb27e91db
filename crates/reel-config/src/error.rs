//! Errors raised while loading reel configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or the merged document did not match
    /// [`crate::ReelConfig`].
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section parsed but one of its fields failed validation.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
