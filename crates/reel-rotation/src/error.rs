//! Error types for topic rotation.

use thiserror::Error;

/// Failures reported by a curriculum store or usage ledger.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backing database reported an error.
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap any backend error.
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(error))
    }
}

/// Errors surfaced by `TopicRotation` operations.
#[derive(Debug, Error)]
pub enum RotationError {
    /// A subject picked for this run has no topics. This is a curriculum
    /// setup problem; the whole selection fails.
    #[error("no topics available for subject {subject_name} ({subject_id})")]
    EmptySubject {
        subject_id: String,
        subject_name: String,
    },

    /// The curriculum store or usage ledger failed.
    #[error("topic retrieval failed: {0}")]
    Retrieval(#[from] StoreError),
}
