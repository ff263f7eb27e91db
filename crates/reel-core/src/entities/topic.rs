use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A syllabus unit within a subject; the unit of selection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub subject_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
