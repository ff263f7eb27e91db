use anyhow::{Context, anyhow};
use reel_core::enums::VideoStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VideoCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel video`.
///
/// Videos are bookkeeping only. Recording topic usage is a separate step
/// (`reel record --video <id>`) taken once the upload is confirmed.
pub async fn handle(
    action: &VideoCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = ctx.service();
    match action {
        VideoCommands::Add {
            class_id,
            subject_id,
            topic_id,
            title,
        } => output(
            &svc.create_video(class_id, subject_id, topic_id, title).await?,
            flags.format,
        ),
        VideoCommands::Status { id, status } => {
            let status: VideoStatus = status.parse().map_err(|e: String| anyhow!(e))?;
            let video = svc
                .transition_video(id, status)
                .await
                .context("use `reel video uploaded <id> <external-id>` to publish")?;
            output(&video, flags.format)
        }
        VideoCommands::Uploaded { id, external_id } => {
            output(&svc.mark_uploaded(id, external_id).await?, flags.format)
        }
        VideoCommands::List { topic_id } => {
            output(&svc.list_videos(topic_id).await?, flags.format)
        }
    }
}
