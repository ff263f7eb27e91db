//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use reel_config::{ConfigError, ReelConfig};

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./curriculum.db"
url = "libsql://reel-test.turso.io"
auth_token = "turso-token"
"#,
        )?;

        let config: ReelConfig = Figment::from(Serialized::defaults(ReelConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./curriculum.db");
        assert_eq!(config.database.url, "libsql://reel-test.turso.io");
        assert_eq!(config.database.auth_token, "turso-token");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn loads_rotation_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[rotation]
subjects_per_run = 6
history_limit = 25
"#,
        )?;

        let config: ReelConfig = Figment::from(Serialized::defaults(ReelConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.rotation.subjects_per_run, 6);
        assert_eq!(config.rotation.history_limit, 25);
        // Untouched section keeps its defaults
        assert_eq!(config.database.path, ".reel/reel.db");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_field_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[rotation]
subjects_per_run = 2
"#,
        )?;

        let config: ReelConfig = Figment::from(Serialized::defaults(ReelConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.rotation.subjects_per_run, 2);
        assert_eq!(config.rotation.history_limit, 100);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".reel")?;
        jail.create_file(
            ".reel/config.toml",
            r#"
[rotation]
subjects_per_run = 3
"#,
        )?;

        let config = ReelConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.rotation.subjects_per_run, 3);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("REEL_ROTATION__SUBJECTS_PER_RUN", "5");

        jail.create_file(
            "config.toml",
            r#"
[rotation]
subjects_per_run = 2
history_limit = 40
"#,
        )?;

        let config: ReelConfig = Figment::from(Serialized::defaults(ReelConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("REEL_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.rotation.subjects_per_run, 5);
        // TOML value not overridden by env should remain
        assert_eq!(config.rotation.history_limit, 40);
        Ok(())
    });
}

#[test]
fn load_reads_prefixed_env() {
    Jail::expect_with(|jail| {
        jail.set_env("REEL_DATABASE__PATH", "/tmp/reel-jail.db");
        jail.set_env("REEL_ROTATION__HISTORY_LIMIT", "10");

        let config = ReelConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.database.path, "/tmp/reel-jail.db");
        assert_eq!(config.rotation.history_limit, 10);
        Ok(())
    });
}

/// Typo'd env var keys are silently ignored by figment.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("REEL_ROTATION__SUBJECTS_PER_RUNN", "9");

        let config = ReelConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.rotation.subjects_per_run, 4);
        Ok(())
    });
}

#[test]
fn load_rejects_zero_history_limit() {
    Jail::expect_with(|jail| {
        jail.set_env("REEL_ROTATION__HISTORY_LIMIT", "0");

        let result = ReelConfig::load();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "rotation.history_limit"
        ));
        Ok(())
    });
}

#[test]
fn load_rejects_half_configured_remote() {
    Jail::expect_with(|jail| {
        jail.set_env("REEL_DATABASE__URL", "libsql://reel.turso.io");

        let result = ReelConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
