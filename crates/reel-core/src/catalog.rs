//! Catalog and selection value types.
//!
//! These are the read models exchanged between the curriculum store and the
//! topic rotation scheduler. They are not tables: a store assembles them from
//! the class → subject → topic hierarchy joined with the usage ledger.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One topic with its usage annotations, as seen in a subject's catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicUsage {
    pub topic_id: String,
    pub topic_name: String,
    pub usage_count: u64,
    pub last_used_at: Option<DateTime<Utc>>,
}

/// A subject and its topics in catalog (insertion) order.
///
/// Class identity is denormalized onto every subject so consumers never need
/// a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubjectUsage {
    pub subject_id: String,
    pub subject_name: String,
    pub class_id: String,
    pub class_name: String,
    pub topics: Vec<TopicUsage>,
}

impl SubjectUsage {
    /// Look up a topic by ID within this subject.
    #[must_use]
    pub fn topic(&self, topic_id: &str) -> Option<&TopicUsage> {
        self.topics.iter().find(|t| t.topic_id == topic_id)
    }
}

/// Flat per-topic usage statistics for a class.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicUsageStat {
    pub topic_id: String,
    pub topic_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub class_id: String,
    pub class_name: String,
    pub usage_count: u64,
    pub last_used_at: Option<DateTime<Utc>>,
}

/// One topic chosen for a generation run, for one subject slot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicSelection {
    pub subject_id: String,
    pub subject_name: String,
    pub topic_id: String,
    pub topic_name: String,
}
