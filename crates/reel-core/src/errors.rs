//! Cross-cutting error types for reel.
//!
//! Domain-specific errors (`DatabaseError`, `RotationError`, `ConfigError`)
//! live in their respective crates. The CLI converges everything through
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any reel crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (names, formats, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Validate a curriculum display name (class, subject, or topic).
///
/// Names must be non-blank. A `:` is rejected because topic history is
/// rendered as `"Subject:Topic"`.
///
/// # Errors
///
/// Returns `CoreError::Validation` describing the first violated rule.
pub fn validate_name(kind: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{kind} name must not be empty")));
    }
    if name.contains(':') {
        return Err(CoreError::Validation(format!(
            "{kind} name '{name}' must not contain ':'"
        )));
    }
    Ok(())
}
