use clap::{Args, Subcommand};

use crate::cli::subcommands::{ClassCommands, SubjectCommands, TopicCommands, VideoCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load a curriculum TOML file. Existing rows are kept.
    Seed(SeedArgs),
    /// Classes.
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },
    /// Subjects of a class.
    Subject {
        #[command(subcommand)]
        action: SubjectCommands,
    },
    /// Topics of a subject.
    Topic {
        #[command(subcommand)]
        action: TopicCommands,
    },
    /// Produced videos.
    Video {
        #[command(subcommand)]
        action: VideoCommands,
    },
    /// Subjects and topics of a class with usage annotations.
    Catalog(ClassArgs),
    /// Flat per-topic usage statistics for a class.
    Stats(ClassArgs),
    /// Pick the least-used topic for each subject of a class.
    Select(SelectArgs),
    /// Record that a topic was used to produce content.
    Record(RecordArgs),
    /// Recently used topics, newest first.
    History(ClassArgs),
    /// Whether every topic of a class has been used at least once.
    Coverage(ClassArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Path to the curriculum TOML file.
    pub file: String,
}

#[derive(Clone, Debug, Args)]
pub struct ClassArgs {
    pub class_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct SelectArgs {
    pub class_id: String,
    /// Number of subjects to pick from (defaults to `rotation.subjects_per_run`).
    #[arg(long)]
    pub subjects: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    pub class_id: String,
    pub subject_id: String,
    pub topic_id: String,
    /// Video that used the topic.
    #[arg(long)]
    pub video: Option<String>,
}
