//! Repository modules implementing operations for all reel entities.
//!
//! Each module adds methods to `ReelService` via `impl ReelService` blocks.

pub mod catalog;
pub mod class;
pub mod seed;
pub mod subject;
pub mod topic;
pub mod usage;
pub mod video;
