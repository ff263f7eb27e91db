use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel class`.
pub async fn handle(
    action: &ClassCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = ctx.service();
    match action {
        ClassCommands::Add { name } => output(&svc.create_class(name).await?, flags.format),
        ClassCommands::List => output(&svc.list_classes().await?, flags.format),
        ClassCommands::Delete { id } => {
            svc.delete_class(id).await?;
            output(&json!({ "deleted": id }), flags.format)
        }
    }
}
