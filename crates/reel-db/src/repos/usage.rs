//! Topic usage ledger.
//!
//! Append-only: there is no update or delete path. Records carry plain IDs
//! and survive deletion of the topic they reference.

use reel_core::entities::{NewUsageRecord, UsageRecord};
use reel_core::ids::PREFIX_USAGE;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::ReelService;

const USAGE_COLS: &str = "id, class_id, subject_id, topic_id, video_id, created_at";

fn row_to_usage(row: &libsql::Row) -> Result<UsageRecord, DatabaseError> {
    Ok(UsageRecord {
        id: row.get(0)?,
        class_id: row.get(1)?,
        subject_id: row.get(2)?,
        topic_id: row.get(3)?,
        video_id: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl ReelService {
    /// Append a usage record as given and return it with its new ID.
    ///
    /// IDs are not checked against the curriculum.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn append_usage_record(
        &self,
        record: &NewUsageRecord,
    ) -> Result<UsageRecord, DatabaseError> {
        let id = self.db().generate_id(PREFIX_USAGE).await?;

        let sql = format!("INSERT INTO topic_usage ({USAGE_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)");
        self.db()
            .conn()
            .execute(
                &sql,
                libsql::params![
                    id.as_str(),
                    record.class_id.as_str(),
                    record.subject_id.as_str(),
                    record.topic_id.as_str(),
                    record.video_id.as_deref(),
                    format_timestamp(&record.created_at),
                ],
            )
            .await?;

        Ok(record.clone().with_id(id))
    }

    /// Append a usage record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn record_topic_usage(
        &self,
        class_id: &str,
        subject_id: &str,
        topic_id: &str,
        video_id: Option<&str>,
    ) -> Result<UsageRecord, DatabaseError> {
        self.append_usage_record(&NewUsageRecord::now(class_id, subject_id, topic_id, video_id))
            .await
    }

    /// Most recent usage records of a class, newest first, at most `limit`.
    ///
    /// Records with equal timestamps come back latest-appended first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_usage(
        &self,
        class_id: &str,
        limit: u32,
    ) -> Result<Vec<UsageRecord>, DatabaseError> {
        let sql = format!(
            "SELECT {USAGE_COLS} FROM topic_usage WHERE class_id = ?1 \
             ORDER BY created_at DESC, rowid DESC LIMIT ?2"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![class_id, i64::from(limit)])
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_usage(&row)?);
        }
        Ok(records)
    }
}
