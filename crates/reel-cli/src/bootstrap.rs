use reel_config::ReelConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ReelConfig> {
    let mut config = ReelConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

/// `--db` always selects a local database, even when a remote one is configured.
fn apply_overrides(config: &mut ReelConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(path = %path, "database path overridden by --db");
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
}

#[cfg(test)]
mod tests {
    use reel_config::ReelConfig;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_forces_local_database() {
        let mut config = ReelConfig::default();
        config.database.url = "libsql://reel.turso.io".into();
        config.database.auth_token = "token".into();
        assert!(config.database.is_remote());

        apply_overrides(&mut config, &flags(Some("/tmp/reel.db")));
        assert!(!config.database.is_remote());
        assert_eq!(config.database.path, "/tmp/reel.db");
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = ReelConfig::default();
        let before = config.database.path.clone();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, before);
    }
}
