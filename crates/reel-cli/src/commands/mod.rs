pub mod class;
pub mod dispatch;
pub mod rotation;
pub mod seed;
pub mod subject;
pub mod topic;
pub mod video;
