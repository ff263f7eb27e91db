use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VideoStatus;

/// A short vertical video produced for one topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub class_id: String,
    pub subject_id: String,
    pub topic_id: String,
    pub title: String,
    pub status: VideoStatus,
    /// Platform-assigned ID once uploaded.
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
