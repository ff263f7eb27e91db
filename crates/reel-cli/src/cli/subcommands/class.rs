use clap::Subcommand;

/// Class commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClassCommands {
    /// Create a class.
    Add { name: String },
    /// List classes.
    List,
    /// Delete a class without subjects.
    Delete { id: String },
}
