//! Database (libSQL / Turso) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default local database path, relative to the working directory.
fn default_path() -> String {
    ".reel/reel.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://reel-prod.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a remote database is configured (URL and token both set).
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check the section for half-configured remote settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a URL is set without a token
    /// (or the reverse), or when the local path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() != self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: "url and auth_token must be set together".into(),
            });
        }
        if !self.is_remote() && self.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty for a local database".into(),
            });
        }
        Ok(())
    }
}
