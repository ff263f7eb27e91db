use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubjectCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel subject`.
pub async fn handle(
    action: &SubjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = ctx.service();
    match action {
        SubjectCommands::Add { class_id, name } => {
            output(&svc.create_subject(class_id, name).await?, flags.format)
        }
        SubjectCommands::List { class_id } => {
            output(&svc.list_subjects(class_id).await?, flags.format)
        }
        SubjectCommands::Delete { id } => {
            svc.delete_subject(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
    }
}
