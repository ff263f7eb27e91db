//! Usage statistics aggregation.

use reel_core::catalog::{SubjectUsage, TopicUsageStat};

use crate::error::RotationError;
use crate::scheduler::TopicRotation;
use crate::store::{CurriculumStore, UsageLedger};

/// Flatten a catalog into one stat row per topic, keeping catalog order.
#[must_use]
pub fn flatten(subjects: &[SubjectUsage]) -> Vec<TopicUsageStat> {
    subjects
        .iter()
        .flat_map(|subject| {
            subject.topics.iter().map(move |topic| TopicUsageStat {
                topic_id: topic.topic_id.clone(),
                topic_name: topic.topic_name.clone(),
                subject_id: subject.subject_id.clone(),
                subject_name: subject.subject_name.clone(),
                class_id: subject.class_id.clone(),
                class_name: subject.class_name.clone(),
                usage_count: topic.usage_count,
                last_used_at: topic.last_used_at,
            })
        })
        .collect()
}

impl<S> TopicRotation<S>
where
    S: CurriculumStore + UsageLedger,
{
    /// Per-topic usage counts and latest usage time for every topic in a class.
    ///
    /// Does not check that the class exists: an unknown class or a class with
    /// no subjects yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::Retrieval` if the store fails. No partial result
    /// is returned.
    pub async fn topic_usage_stats(
        &self,
        class_id: &str,
    ) -> Result<Vec<TopicUsageStat>, RotationError> {
        let catalog = self.catalog(class_id).await?;
        Ok(flatten(&catalog))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reel_core::catalog::TopicUsage;

    use super::*;

    fn subject(id: &str, name: &str, topics: &[(&str, u64)]) -> SubjectUsage {
        SubjectUsage {
            subject_id: id.into(),
            subject_name: name.into(),
            class_id: "cls-11".into(),
            class_name: "Class 11".into(),
            topics: topics
                .iter()
                .map(|(t, n)| TopicUsage {
                    topic_id: format!("top-{t}"),
                    topic_name: (*t).into(),
                    usage_count: *n,
                    last_used_at: None,
                })
                .collect(),
        }
    }

    #[test]
    fn flatten_keeps_catalog_order_and_denormalizes() {
        let catalog = vec![
            subject("sub-phy", "Physics", &[("Motion", 0), ("Gravitation", 2)]),
            subject("sub-chem", "Chemistry", &[("Atoms", 1)]),
        ];

        let stats = flatten(&catalog);
        let names: Vec<_> = stats
            .iter()
            .map(|s| (s.subject_name.as_str(), s.topic_name.as_str(), s.usage_count))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Physics", "Motion", 0),
                ("Physics", "Gravitation", 2),
                ("Chemistry", "Atoms", 1),
            ]
        );
        assert!(stats.iter().all(|s| s.class_name == "Class 11"));
    }

    #[test]
    fn flatten_skips_empty_subjects() {
        let catalog = vec![subject("sub-bio", "Biology", &[])];
        assert!(flatten(&catalog).is_empty());
    }
}
