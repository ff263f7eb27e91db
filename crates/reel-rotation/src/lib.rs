//! # reel-rotation
//!
//! Least-used topic rotation for content generation runs.
//!
//! `TopicRotation` decides which curriculum topic feeds the next generation
//! pass so that coverage spreads evenly across a syllabus. It holds no state
//! of its own: usage counts are read from an injected store on every call and
//! usage is appended to the same store's ledger.
//!
//! Operations:
//! - [`TopicRotation::topic_usage_stats`]: per-topic usage counts for a class
//! - [`TopicRotation::catalog`]: subjects with their topics and usage counts
//! - [`TopicRotation::select_topics`]: one least-used topic per subject
//! - [`TopicRotation::record_usage`]: best-effort append after production
//! - [`TopicRotation::topics_history`]: recent `"Subject:Topic"` strings
//! - [`TopicRotation::is_fully_covered`]: whether every topic was used
//!
//! # Concurrency
//!
//! Selection does not reserve the topics it returns. Two concurrent runs for
//! the same class can pick the same least-used topic; that costs fairness,
//! not correctness, because usage is only recorded after a video exists.
//! Deployments needing strict fairness must serialize the select → produce →
//! record sequence per class outside this crate.

pub mod coverage;
pub mod error;
pub mod history;
pub mod memory;
pub mod scheduler;
pub mod select;
pub mod stats;
pub mod store;

pub use error::{RotationError, StoreError};
pub use memory::MemoryStore;
pub use scheduler::TopicRotation;
pub use store::{CurriculumStore, UsageLedger};
