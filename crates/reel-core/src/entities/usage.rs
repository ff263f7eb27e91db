use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An append-only ledger entry: one topic produced one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UsageRecord {
    pub id: String,
    pub class_id: String,
    pub subject_id: String,
    pub topic_id: String,
    pub video_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A usage record that has not been assigned an ID yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUsageRecord {
    pub class_id: String,
    pub subject_id: String,
    pub topic_id: String,
    pub video_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUsageRecord {
    /// Build a record stamped with the current time.
    #[must_use]
    pub fn now(class_id: &str, subject_id: &str, topic_id: &str, video_id: Option<&str>) -> Self {
        Self {
            class_id: class_id.to_string(),
            subject_id: subject_id.to_string(),
            topic_id: topic_id.to_string(),
            video_id: video_id.map(String::from),
            created_at: Utc::now(),
        }
    }

    /// Attach an ID, producing the stored form.
    #[must_use]
    pub fn with_id(self, id: String) -> UsageRecord {
        UsageRecord {
            id,
            class_id: self.class_id,
            subject_id: self.subject_id,
            topic_id: self.topic_id,
            video_id: self.video_id,
            created_at: self.created_at,
        }
    }
}
