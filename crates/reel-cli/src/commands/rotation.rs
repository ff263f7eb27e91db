//! Scheduler commands: catalog, stats, selection, recording, history, coverage.

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ClassArgs, RecordArgs, SelectArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CoverageResponse<'a> {
    class_id: &'a str,
    fully_covered: bool,
}

#[derive(Debug, Serialize)]
struct RecordResponse<'a> {
    class_id: &'a str,
    subject_id: &'a str,
    topic_id: &'a str,
    video_id: Option<&'a str>,
}

pub async fn catalog(
    args: &ClassArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(&ctx.rotation.catalog(&args.class_id).await?, flags.format)
}

pub async fn stats(args: &ClassArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.rotation.topic_usage_stats(&args.class_id).await?;
    output(&stats, flags.format)
}

pub async fn select(
    args: &SelectArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let selections = match args.subjects {
        Some(n) => ctx.rotation.select_topics(&args.class_id, n).await?,
        None => ctx.rotation.select_topics_for_run(&args.class_id).await?,
    };
    output(&selections, flags.format)
}

/// Best effort: a ledger failure is logged by the scheduler, not reported here.
pub async fn record(
    args: &RecordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.rotation
        .record_usage(
            &args.class_id,
            &args.subject_id,
            &args.topic_id,
            args.video.as_deref(),
        )
        .await;
    output(
        &RecordResponse {
            class_id: &args.class_id,
            subject_id: &args.subject_id,
            topic_id: &args.topic_id,
            video_id: args.video.as_deref(),
        },
        flags.format,
    )
}

pub async fn history(
    args: &ClassArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let history = ctx.rotation.topics_history(&args.class_id).await?;
    output(&history, flags.format)
}

pub async fn coverage(
    args: &ClassArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fully_covered = ctx.rotation.is_fully_covered(&args.class_id).await;
    output(
        &CoverageResponse {
            class_id: &args.class_id,
            fully_covered,
        },
        flags.format,
    )
}
