use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TopicCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel topic`.
pub async fn handle(
    action: &TopicCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = ctx.service();
    match action {
        TopicCommands::Add { subject_id, name } => {
            output(&svc.create_topic(subject_id, name).await?, flags.format)
        }
        TopicCommands::List { subject_id } => {
            output(&svc.list_topics(subject_id).await?, flags.format)
        }
        TopicCommands::Delete { id } => {
            svc.delete_topic(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
    }
}
