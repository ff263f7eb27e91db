use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A discipline within a class. Unique per (name, class).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub class_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
