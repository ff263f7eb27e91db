//! Entity structs for the reel domain.
//!
//! Each entity maps to a table in the libSQL database (see
//! `reel-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod class;
mod subject;
mod topic;
mod usage;
mod video;

pub use class::Class;
pub use subject::Subject;
pub use topic::Topic;
pub use usage::{NewUsageRecord, UsageRecord};
pub use video::Video;
