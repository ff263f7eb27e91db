//! Curriculum seeding from TOML.
//!
//! ```toml
//! [[classes]]
//! name = "Class 11"
//!
//! [[classes.subjects]]
//! name = "Physics"
//! topics = ["Motion", "Gravitation"]
//! ```
//!
//! Seeding is idempotent: rows are matched by name under their parent and
//! reused, so re-running a file only adds what is new.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::service::ReelService;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumSeed {
    #[serde(default)]
    pub classes: Vec<ClassSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSeed {
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<SubjectSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSeed {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Rows created by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub classes: usize,
    pub subjects: usize,
    pub topics: usize,
}

impl CurriculumSeed {
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` if the document is not a valid seed.
    pub fn from_toml_str(source: &str) -> Result<Self, DatabaseError> {
        Ok(toml::from_str(source).context("invalid curriculum seed")?)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Other` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, DatabaseError> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&source)
    }
}

impl ReelService {
    /// Create every class, subject, and topic in `seed` that does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on an invalid name or a failed write. Rows
    /// created before the failure are kept.
    pub async fn seed_curriculum(
        &self,
        seed: &CurriculumSeed,
    ) -> Result<SeedSummary, DatabaseError> {
        let mut summary = SeedSummary::default();

        for class_seed in &seed.classes {
            let class = match self.find_class_by_name(&class_seed.name).await? {
                Some(class) => class,
                None => {
                    summary.classes += 1;
                    self.create_class(&class_seed.name).await?
                }
            };

            for subject_seed in &class_seed.subjects {
                let existing = self
                    .find_subject_by_name(&class.id, &subject_seed.name)
                    .await?;
                let subject = match existing {
                    Some(subject) => subject,
                    None => {
                        summary.subjects += 1;
                        self.create_subject(&class.id, &subject_seed.name).await?
                    }
                };

                for topic in &subject_seed.topics {
                    if self.find_topic_by_name(&subject.id, topic).await?.is_none() {
                        self.create_topic(&subject.id, topic).await?;
                        summary.topics += 1;
                    }
                }
            }
        }

        tracing::info!(
            classes = summary.classes,
            subjects = summary.subjects,
            topics = summary.topics,
            "seeded curriculum"
        );
        Ok(summary)
    }
}
