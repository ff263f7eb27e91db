use std::path::Path;

use anyhow::Context;
use reel_db::repos::seed::CurriculumSeed;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `reel seed`.
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let seed = CurriculumSeed::from_path(Path::new(&args.file))?;
    let summary = ctx
        .service()
        .seed_curriculum(&seed)
        .await
        .with_context(|| format!("failed to seed curriculum from {}", args.file))?;
    output(&summary, flags.format)
}
