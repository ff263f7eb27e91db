//! Recent topic history formatted for a content-generation prompt.
//!
//! The generator is told which `"Subject:Topic"` pairs it covered recently so
//! consecutive runs do not repeat the same material verbatim.

use std::collections::HashMap;

use reel_core::catalog::SubjectUsage;
use reel_core::entities::UsageRecord;

use crate::error::RotationError;
use crate::scheduler::TopicRotation;
use crate::store::{CurriculumStore, UsageLedger};

/// Format usage records as `"Subject:Topic"`, newest first, at most `limit`.
///
/// Records whose subject or topic no longer exists in the catalog are dropped.
#[must_use]
pub fn format_history(
    mut records: Vec<UsageRecord>,
    catalog: &[SubjectUsage],
    limit: usize,
) -> Vec<String> {
    let subjects: HashMap<&str, &SubjectUsage> = catalog
        .iter()
        .map(|s| (s.subject_id.as_str(), s))
        .collect();

    // Stable: equal timestamps keep the ledger's newest-first order.
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    records
        .iter()
        .filter_map(|record| {
            let subject = subjects.get(record.subject_id.as_str())?;
            let topic = subject.topic(&record.topic_id)?;
            Some(format!("{}:{}", subject.subject_name, topic.topic_name))
        })
        .take(limit)
        .collect()
}

impl<S> TopicRotation<S>
where
    S: CurriculumStore + UsageLedger,
{
    /// Recent usage for a class as `"Subject:Topic"` strings, newest first,
    /// bounded by the configured `history_limit`.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::Retrieval` if the ledger or catalog read fails.
    pub async fn topics_history(&self, class_id: &str) -> Result<Vec<String>, RotationError> {
        let limit = self.config().history_limit;
        let records = self.store().recent_usage(class_id, limit).await?;
        let catalog = self.catalog(class_id).await?;

        let history = format_history(records, &catalog, limit as usize);
        tracing::debug!(class_id, entries = history.len(), "built topic history");
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use reel_core::catalog::TopicUsage;

    use super::*;

    fn catalog() -> Vec<SubjectUsage> {
        vec![SubjectUsage {
            subject_id: "sub-phy".into(),
            subject_name: "Physics".into(),
            class_id: "cls-11".into(),
            class_name: "Class 11".into(),
            topics: vec![
                TopicUsage {
                    topic_id: "top-motion".into(),
                    topic_name: "Motion".into(),
                    usage_count: 1,
                    last_used_at: None,
                },
                TopicUsage {
                    topic_id: "top-grav".into(),
                    topic_name: "Gravitation".into(),
                    usage_count: 1,
                    last_used_at: None,
                },
            ],
        }]
    }

    fn record(id: &str, subject_id: &str, topic_id: &str, minutes_ago: i64) -> UsageRecord {
        UsageRecord {
            id: id.into(),
            class_id: "cls-11".into(),
            subject_id: subject_id.into(),
            topic_id: topic_id.into(),
            video_id: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn newest_first_regardless_of_input_order() {
        let records = vec![
            record("use-1", "sub-phy", "top-motion", 10),
            record("use-2", "sub-phy", "top-grav", 1),
        ];
        assert_eq!(
            format_history(records, &catalog(), 100),
            vec!["Physics:Gravitation", "Physics:Motion"]
        );
    }

    #[test]
    fn unresolvable_records_are_dropped() {
        let records = vec![
            record("use-1", "sub-phy", "top-deleted", 1),
            record("use-2", "sub-gone", "top-motion", 2),
            record("use-3", "sub-phy", "top-motion", 3),
        ];
        assert_eq!(format_history(records, &catalog(), 100), vec!["Physics:Motion"]);
    }

    #[test]
    fn output_is_bounded() {
        let records = (0..10)
            .map(|i| record(&format!("use-{i}"), "sub-phy", "top-motion", i))
            .collect();
        assert_eq!(format_history(records, &catalog(), 3).len(), 3);
    }
}
