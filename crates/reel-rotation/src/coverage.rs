//! Syllabus coverage check.

use reel_core::catalog::SubjectUsage;

use crate::scheduler::TopicRotation;
use crate::store::{CurriculumStore, UsageLedger};

/// Whether every topic in the catalog has been used at least once.
///
/// A catalog with no topics at all is not covered.
#[must_use]
pub fn all_covered(subjects: &[SubjectUsage]) -> bool {
    let mut topics = subjects.iter().flat_map(|s| s.topics.iter()).peekable();
    topics.peek().is_some() && topics.all(|t| t.usage_count >= 1)
}

impl<S> TopicRotation<S>
where
    S: CurriculumStore + UsageLedger,
{
    /// Whether a full sweep of the class syllabus has completed.
    ///
    /// Fails closed: a retrieval error reports `false` (not yet covered).
    pub async fn is_fully_covered(&self, class_id: &str) -> bool {
        match self.catalog(class_id).await {
            Ok(catalog) => all_covered(&catalog),
            Err(error) => {
                tracing::warn!(%error, class_id, "coverage check failed; reporting not covered");
                false
            }
        }
    }
}
