//! Service layer hosting all repository methods.
//!
//! `ReelService` wraps `ReelDb`. Repo methods are implemented as
//! `impl ReelService` blocks under [`crate::repos`], and the rotation store
//! traits are implemented on it as well.

use reel_config::DatabaseConfig;

use crate::ReelDb;
use crate::error::DatabaseError;

/// Entry point for curriculum, video, and usage operations.
pub struct ReelService {
    db: ReelDb,
}

impl ReelService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: ReelDb::open_local(db_path).await?,
        })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: ReelDb::open_remote(url, auth_token).await?,
        })
    }

    /// Open whichever database the configuration points at: remote when a URL
    /// and token are set, otherwise the local path.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            tracing::debug!(url = %config.url, "opening remote database");
            Self::new_remote(&config.url, &config.auth_token).await
        } else {
            tracing::debug!(path = %config.path, "opening local database");
            Self::new_local(&config.path).await
        }
    }

    /// Create from an existing `ReelDb`.
    #[must_use]
    pub const fn from_db(db: ReelDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ReelDb {
        &self.db
    }
}
