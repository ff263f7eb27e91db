use clap::Subcommand;

/// Video commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VideoCommands {
    /// Register a pending video for a topic.
    Add {
        #[arg(long = "class")]
        class_id: String,
        #[arg(long = "subject")]
        subject_id: String,
        #[arg(long = "topic")]
        topic_id: String,
        title: String,
    },
    /// Move a video to a new status: rendered, uploaded, failed.
    Status { id: String, status: String },
    /// Mark a rendered video uploaded under its platform ID.
    Uploaded { id: String, external_id: String },
    /// List the videos of a topic, newest first.
    List {
        #[arg(long = "topic")]
        topic_id: String,
    },
}
