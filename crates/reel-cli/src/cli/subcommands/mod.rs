mod class;
mod subject;
mod topic;
mod video;

pub use class::ClassCommands;
pub use subject::SubjectCommands;
pub use topic::TopicCommands;
pub use video::VideoCommands;
