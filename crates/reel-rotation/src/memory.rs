//! In-memory curriculum store and usage ledger.
//!
//! Backs tests and dry runs. Insertion order is catalog order. Reads and
//! writes can be made to fail on demand to exercise error paths.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reel_core::catalog::{SubjectUsage, TopicUsage};
use reel_core::entities::{NewUsageRecord, UsageRecord};
use reel_core::ids::{PREFIX_CLASS, PREFIX_SUBJECT, PREFIX_TOPIC, PREFIX_USAGE};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::{CurriculumStore, UsageLedger};

#[derive(Debug, Clone)]
struct Node {
    id: String,
    parent_id: String,
    name: String,
}

#[derive(Debug, Default)]
struct State {
    classes: Vec<Node>,
    subjects: Vec<Node>,
    topics: Vec<Node>,
    usage: Vec<UsageRecord>,
}

/// Curriculum and usage ledger held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
    next_id: AtomicU64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n:08x}")
    }

    /// Add a class and return its ID.
    pub async fn add_class(&self, name: &str) -> String {
        let id = self.generate_id(PREFIX_CLASS);
        self.state.write().await.classes.push(Node {
            id: id.clone(),
            parent_id: String::new(),
            name: name.to_string(),
        });
        id
    }

    /// Add a subject under a class and return its ID.
    pub async fn add_subject(&self, class_id: &str, name: &str) -> String {
        let id = self.generate_id(PREFIX_SUBJECT);
        self.state.write().await.subjects.push(Node {
            id: id.clone(),
            parent_id: class_id.to_string(),
            name: name.to_string(),
        });
        id
    }

    /// Add a topic under a subject and return its ID.
    pub async fn add_topic(&self, subject_id: &str, name: &str) -> String {
        let id = self.generate_id(PREFIX_TOPIC);
        self.state.write().await.topics.push(Node {
            id: id.clone(),
            parent_id: subject_id.to_string(),
            name: name.to_string(),
        });
        id
    }

    /// Remove a topic from the catalog. Its usage records stay in the ledger.
    pub async fn remove_topic(&self, topic_id: &str) {
        self.state.write().await.topics.retain(|t| t.id != topic_id);
    }

    /// Make every read fail with `StoreError::Unavailable`.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every append fail with `StoreError::Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Total number of usage records in the ledger.
    pub async fn usage_len(&self) -> usize {
        self.state.read().await.usage.len()
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store reads disabled".into()));
        }
        Ok(())
    }
}

fn topic_usage(topic: &Node, usage: &[UsageRecord]) -> TopicUsage {
    let mut usage_count = 0;
    let mut last_used_at: Option<DateTime<Utc>> = None;
    for record in usage.iter().filter(|u| u.topic_id == topic.id) {
        usage_count += 1;
        last_used_at = last_used_at.max(Some(record.created_at));
    }
    TopicUsage {
        topic_id: topic.id.clone(),
        topic_name: topic.name.clone(),
        usage_count,
        last_used_at,
    }
}

#[async_trait]
impl CurriculumStore for MemoryStore {
    async fn subjects_with_topic_usage(
        &self,
        class_id: &str,
    ) -> Result<Vec<SubjectUsage>, StoreError> {
        self.check_reads()?;
        let state = self.state.read().await;

        let Some(class) = state.classes.iter().find(|c| c.id == class_id) else {
            return Ok(Vec::new());
        };

        Ok(state
            .subjects
            .iter()
            .filter(|s| s.parent_id == class.id)
            .map(|subject| SubjectUsage {
                subject_id: subject.id.clone(),
                subject_name: subject.name.clone(),
                class_id: class.id.clone(),
                class_name: class.name.clone(),
                topics: state
                    .topics
                    .iter()
                    .filter(|t| t.parent_id == subject.id)
                    .map(|t| topic_usage(t, &state.usage))
                    .collect(),
            })
            .collect())
    }
}

#[async_trait]
impl UsageLedger for MemoryStore {
    async fn append_usage(&self, record: &NewUsageRecord) -> Result<UsageRecord, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store writes disabled".into()));
        }
        let stored = record.clone().with_id(self.generate_id(PREFIX_USAGE));
        self.state.write().await.usage.push(stored.clone());
        Ok(stored)
    }

    async fn recent_usage(
        &self,
        class_id: &str,
        limit: u32,
    ) -> Result<Vec<UsageRecord>, StoreError> {
        self.check_reads()?;
        let state = self.state.read().await;

        // Latest appended first, then a stable sort so equal timestamps keep
        // append order reversed.
        let mut records: Vec<UsageRecord> = state
            .usage
            .iter()
            .rev()
            .filter(|u| u.class_id == class_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit as usize);
        Ok(records)
    }
}
