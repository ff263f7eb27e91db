use std::path::Path;

use anyhow::Context;
use reel_config::ReelConfig;
use reel_db::service::ReelService;
use reel_rotation::TopicRotation;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub rotation: TopicRotation<ReelService>,
}

impl AppContext {
    /// Open the configured database and build the rotation scheduler over it.
    pub async fn init(config: ReelConfig) -> anyhow::Result<Self> {
        if !config.database.is_remote() {
            ensure_parent_dir(&config.database.path)?;
        }

        let service = ReelService::from_config(&config.database)
            .await
            .context("failed to initialize reel-db service")?;

        Ok(Self {
            rotation: TopicRotation::new(service, config.rotation),
        })
    }

    /// The curriculum and video service behind the scheduler.
    pub const fn service(&self) -> &ReelService {
        self.rotation.store()
    }
}

fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(db_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
