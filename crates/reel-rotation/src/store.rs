//! Store seams consumed by the scheduler.
//!
//! `reel-db` implements both traits on its libSQL service; [`crate::MemoryStore`]
//! implements them in memory for tests.

use async_trait::async_trait;
use reel_core::catalog::SubjectUsage;
use reel_core::entities::{NewUsageRecord, UsageRecord};

use crate::error::StoreError;

/// Read-only view of the class → subject → topic hierarchy with usage counts.
#[async_trait]
pub trait CurriculumStore: Send + Sync {
    /// Subjects of a class in insertion order, each with its topics in
    /// insertion order, annotated with usage count and latest usage time.
    ///
    /// Returns an empty list for a class with no subjects (including an
    /// unknown class).
    async fn subjects_with_topic_usage(
        &self,
        class_id: &str,
    ) -> Result<Vec<SubjectUsage>, StoreError>;
}

/// Append-only log of topic usage.
#[async_trait]
pub trait UsageLedger: Send + Sync {
    /// Append one usage record and return it with its assigned ID.
    async fn append_usage(&self, record: &NewUsageRecord) -> Result<UsageRecord, StoreError>;

    /// Most recent usage records for a class, newest first, at most `limit`.
    async fn recent_usage(
        &self,
        class_id: &str,
        limit: u32,
    ) -> Result<Vec<UsageRecord>, StoreError>;
}
