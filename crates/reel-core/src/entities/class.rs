use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root of the curriculum hierarchy, e.g. a grade level ("Class 11").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
