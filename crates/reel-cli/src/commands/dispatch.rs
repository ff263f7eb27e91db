use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Seed(args) => commands::seed::handle(&args, ctx, flags).await,
        Commands::Class { action } => commands::class::handle(&action, ctx, flags).await,
        Commands::Subject { action } => commands::subject::handle(&action, ctx, flags).await,
        Commands::Topic { action } => commands::topic::handle(&action, ctx, flags).await,
        Commands::Video { action } => commands::video::handle(&action, ctx, flags).await,
        Commands::Catalog(args) => commands::rotation::catalog(&args, ctx, flags).await,
        Commands::Stats(args) => commands::rotation::stats(&args, ctx, flags).await,
        Commands::Select(args) => commands::rotation::select(&args, ctx, flags).await,
        Commands::Record(args) => commands::rotation::record(&args, ctx, flags).await,
        Commands::History(args) => commands::rotation::history(&args, ctx, flags).await,
        Commands::Coverage(args) => commands::rotation::coverage(&args, ctx, flags).await,
    }
}
