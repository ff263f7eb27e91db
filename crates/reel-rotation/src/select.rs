//! Least-used topic selection.
//!
//! For each subject in catalog order, pick the topic with the lowest usage
//! count. Ties go to the topic that comes first in the subject's catalog
//! (insertion) order; the sort key is `(usage_count, catalog_position)`.
//! Selection is not randomized: repeated runs sweep the syllabus in order.

use reel_core::catalog::{SubjectUsage, TopicSelection, TopicUsage};

use crate::error::RotationError;
use crate::scheduler::TopicRotation;
use crate::store::{CurriculumStore, UsageLedger};

/// The least-used topic of a subject, or `None` if it has no topics.
#[must_use]
pub fn least_used(subject: &SubjectUsage) -> Option<&TopicUsage> {
    subject
        .topics
        .iter()
        .enumerate()
        .min_by_key(|(position, topic)| (topic.usage_count, *position))
        .map(|(_, topic)| topic)
}

/// Choose one topic for each of the first `subjects_per_run` subjects.
///
/// # Errors
///
/// Returns `RotationError::EmptySubject` for the first processed subject
/// without topics.
pub fn choose(
    subjects: &[SubjectUsage],
    subjects_per_run: usize,
) -> Result<Vec<TopicSelection>, RotationError> {
    subjects
        .iter()
        .take(subjects_per_run)
        .map(|subject| {
            let topic = least_used(subject).ok_or_else(|| RotationError::EmptySubject {
                subject_id: subject.subject_id.clone(),
                subject_name: subject.subject_name.clone(),
            })?;
            Ok(TopicSelection {
                subject_id: subject.subject_id.clone(),
                subject_name: subject.subject_name.clone(),
                topic_id: topic.topic_id.clone(),
                topic_name: topic.topic_name.clone(),
            })
        })
        .collect()
}

impl<S> TopicRotation<S>
where
    S: CurriculumStore + UsageLedger,
{
    /// Select one least-used topic per subject for a generation run.
    ///
    /// Covers at most `subjects_per_run` subjects, taken in catalog order; a
    /// class with fewer subjects yields fewer entries. Never records usage.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::EmptySubject` if a processed subject has no
    /// topics, or `RotationError::Retrieval` if the store fails.
    pub async fn select_topics(
        &self,
        class_id: &str,
        subjects_per_run: usize,
    ) -> Result<Vec<TopicSelection>, RotationError> {
        let catalog = self.catalog(class_id).await?;
        let selections = choose(&catalog, subjects_per_run)?;

        for selection in &selections {
            tracing::debug!(
                class_id,
                subject = %selection.subject_name,
                topic = %selection.topic_name,
                "selected least-used topic"
            );
        }
        Ok(selections)
    }

    /// [`Self::select_topics`] with the configured `subjects_per_run`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::select_topics`].
    pub async fn select_topics_for_run(
        &self,
        class_id: &str,
    ) -> Result<Vec<TopicSelection>, RotationError> {
        self.select_topics(class_id, self.config().subjects_per_run)
            .await
    }
}
