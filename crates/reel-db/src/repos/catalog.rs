//! Catalog read model: subjects of a class with per-topic usage.

use reel_core::catalog::{SubjectUsage, TopicUsage};

use crate::error::DatabaseError;
use crate::helpers::{get_count, get_opt_string, parse_optional_datetime};
use crate::service::ReelService;

// One row per topic, or a single row with NULL topic columns for a subject
// without topics. Ordered by the subject and topic `position` columns.
const CATALOG_SQL: &str = "\
SELECT s.id, s.name, c.id, c.name, t.id, t.name, COUNT(u.id), MAX(u.created_at), \
       s.position AS subject_pos, t.position AS topic_pos \
FROM subjects s \
JOIN classes c ON c.id = s.class_id \
LEFT JOIN topics t ON t.subject_id = s.id \
LEFT JOIN topic_usage u ON u.topic_id = t.id \
WHERE s.class_id = ?1 \
GROUP BY s.id, t.id \
ORDER BY subject_pos, topic_pos";

impl ReelService {
    /// Subjects of a class in catalog order, each with its topics in catalog
    /// order annotated with usage count and last use.
    ///
    /// An unknown class yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn subject_catalog(
        &self,
        class_id: &str,
    ) -> Result<Vec<SubjectUsage>, DatabaseError> {
        let mut rows = self.db().conn().query(CATALOG_SQL, [class_id]).await?;

        let mut catalog: Vec<SubjectUsage> = Vec::new();
        while let Some(row) = rows.next().await? {
            let subject_id: String = row.get(0)?;
            if catalog.last().is_none_or(|s| s.subject_id != subject_id) {
                catalog.push(SubjectUsage {
                    subject_id,
                    subject_name: row.get(1)?,
                    class_id: row.get(2)?,
                    class_name: row.get(3)?,
                    topics: Vec::new(),
                });
            }

            let Some(topic_id) = get_opt_string(&row, 4)? else {
                continue;
            };
            let last_used_at = get_opt_string(&row, 7)?;
            let topic = TopicUsage {
                topic_id,
                topic_name: row.get(5)?,
                usage_count: get_count(&row, 6)?,
                last_used_at: parse_optional_datetime(last_used_at.as_deref())?,
            };
            if let Some(subject) = catalog.last_mut() {
                subject.topics.push(topic);
            }
        }

        tracing::debug!(class_id, subjects = catalog.len(), "loaded subject catalog");
        Ok(catalog)
    }
}
