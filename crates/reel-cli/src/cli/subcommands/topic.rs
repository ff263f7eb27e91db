use clap::Subcommand;

/// Topic commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TopicCommands {
    /// Create a topic in a subject.
    Add {
        #[arg(long = "subject")]
        subject_id: String,
        name: String,
    },
    /// List the topics of a subject.
    List {
        #[arg(long = "subject")]
        subject_id: String,
    },
    /// Delete a topic. Its usage history is kept.
    Delete { id: String },
}
