//! The `TopicRotation` handle and its write path.
//!
//! Read operations live in sibling modules as `impl TopicRotation` blocks:
//! [`crate::stats`], [`crate::select`], [`crate::history`], [`crate::coverage`].

use reel_config::RotationConfig;
use reel_core::catalog::SubjectUsage;
use reel_core::entities::NewUsageRecord;

use crate::error::RotationError;
use crate::store::{CurriculumStore, UsageLedger};

/// Stateless least-used topic scheduler over an injected store.
///
/// Every call reads fresh state from the store; nothing is cached between
/// calls. Share across tasks with `Arc<TopicRotation<S>>`.
pub struct TopicRotation<S> {
    store: S,
    config: RotationConfig,
}

impl<S> TopicRotation<S>
where
    S: CurriculumStore + UsageLedger,
{
    /// Create a scheduler with the given store and rotation settings.
    pub const fn new(store: S, config: RotationConfig) -> Self {
        Self { store, config }
    }

    /// Create a scheduler with default settings (4 subjects per run,
    /// 100-record history window).
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, RotationConfig::default())
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Access the rotation settings.
    #[must_use]
    pub const fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Subjects of a class with their topics and usage counts, in catalog
    /// (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::Retrieval` if the store fails.
    pub async fn catalog(&self, class_id: &str) -> Result<Vec<SubjectUsage>, RotationError> {
        Ok(self.store.subjects_with_topic_usage(class_id).await?)
    }

    /// Record that a topic produced content.
    ///
    /// Call only after the video (or question set) actually exists. Selection
    /// never records usage on its own, so a failed generation does not count
    /// against its topic.
    ///
    /// Ledger failures are logged and swallowed: bookkeeping drift is
    /// tolerated, blocking content production is not.
    pub async fn record_usage(
        &self,
        class_id: &str,
        subject_id: &str,
        topic_id: &str,
        video_id: Option<&str>,
    ) {
        let record = NewUsageRecord::now(class_id, subject_id, topic_id, video_id);
        match self.store.append_usage(&record).await {
            Ok(stored) => tracing::debug!(
                usage_id = %stored.id,
                class_id,
                subject_id,
                topic_id,
                video_id = video_id.unwrap_or_default(),
                "recorded topic usage"
            ),
            Err(error) => tracing::warn!(
                %error,
                class_id,
                subject_id,
                topic_id,
                "failed to record topic usage; continuing"
            ),
        }
    }
}
