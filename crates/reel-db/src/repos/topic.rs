//! Topic repository.
//!
//! Topics carry a `position` within their subject, assigned on insert as one
//! past the current maximum. It is the catalog order the least-used
//! tie-break relies on, so it never changes after insert.

use chrono::Utc;

use reel_core::entities::Topic;
use reel_core::errors::validate_name;
use reel_core::ids::PREFIX_TOPIC;

use crate::error::{DatabaseError, map_unique};
use crate::helpers::{format_timestamp, parse_datetime};
use crate::service::ReelService;

const TOPIC_COLS: &str = "id, subject_id, name, created_at";

fn row_to_topic(row: &libsql::Row) -> Result<Topic, DatabaseError> {
    Ok(Topic {
        id: row.get(0)?,
        subject_id: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ReelService {
    /// Append a topic to the end of a subject's catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the subject does not exist, or
    /// `DatabaseError::InvalidState` on a duplicate name within the subject.
    pub async fn create_topic(&self, subject_id: &str, name: &str) -> Result<Topic, DatabaseError> {
        validate_name("topic", name)?;
        let subject = self.get_subject(subject_id).await?;
        let id = self.db().generate_id(PREFIX_TOPIC).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO topics (id, subject_id, name, position, created_at) \
                 VALUES (?1, ?2, ?3, \
                   (SELECT COALESCE(MAX(position), 0) + 1 FROM topics WHERE subject_id = ?2), \
                   ?4)",
                libsql::params![id.as_str(), subject_id, name, format_timestamp(&now)],
            )
            .await
            .map_err(|e| map_unique(e, || format!("topic '{name}' in {}", subject.name)))?;

        Ok(Topic {
            id,
            subject_id: subject_id.to_string(),
            name: name.to_string(),
            created_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the topic does not exist.
    pub async fn get_topic(&self, id: &str) -> Result<Topic, DatabaseError> {
        let sql = format!("SELECT {TOPIC_COLS} FROM topics WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_topic(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn find_topic_by_name(
        &self,
        subject_id: &str,
        name: &str,
    ) -> Result<Option<Topic>, DatabaseError> {
        let sql = format!("SELECT {TOPIC_COLS} FROM topics WHERE subject_id = ?1 AND name = ?2");
        let mut rows = self.db().conn().query(&sql, [subject_id, name]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_topic(&row)?)),
            None => Ok(None),
        }
    }

    /// Topics of a subject in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_topics(&self, subject_id: &str) -> Result<Vec<Topic>, DatabaseError> {
        let sql =
            format!("SELECT {TOPIC_COLS} FROM topics WHERE subject_id = ?1 ORDER BY position");
        let mut rows = self.db().conn().query(&sql, [subject_id]).await?;

        let mut topics = Vec::new();
        while let Some(row) = rows.next().await? {
            topics.push(row_to_topic(&row)?);
        }
        Ok(topics)
    }

    /// Remove a topic from the catalog. Its usage records stay in the ledger
    /// and are dropped from history output.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the topic does not exist.
    pub async fn delete_topic(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM topics WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(topic_id = id, "deleted topic");
        Ok(())
    }
}
