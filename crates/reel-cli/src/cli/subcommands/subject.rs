use clap::Subcommand;

/// Subject commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubjectCommands {
    /// Create a subject in a class.
    Add {
        #[arg(long = "class")]
        class_id: String,
        name: String,
    },
    /// List the subjects of a class.
    List {
        #[arg(long = "class")]
        class_id: String,
    },
    /// Delete a subject and its topics.
    Delete { id: String },
}
