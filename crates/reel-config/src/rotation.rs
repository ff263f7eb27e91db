//! Topic rotation settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of subjects covered by one generation run.
const fn default_subjects_per_run() -> usize {
    4
}

/// Default number of recent usage records included in topic history.
const fn default_history_limit() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotationConfig {
    /// Maximum subjects (one topic each) selected per generation run.
    #[serde(default = "default_subjects_per_run")]
    pub subjects_per_run: usize,

    /// Recency window for the "Subject:Topic" history list.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            subjects_per_run: default_subjects_per_run(),
            history_limit: default_history_limit(),
        }
    }
}

impl RotationConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `history_limit` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rotation.history_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
