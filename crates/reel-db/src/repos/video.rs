//! Video repository.
//!
//! Status moves follow [`VideoStatus::allowed_next_states`]. The move to
//! `uploaded` only happens through [`ReelService::mark_uploaded`], which
//! records the platform ID. Creating or publishing a video never touches the
//! usage ledger.

use chrono::Utc;

use reel_core::entities::Video;
use reel_core::enums::VideoStatus;
use reel_core::ids::PREFIX_VIDEO;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime, parse_enum};
use crate::service::ReelService;

const VIDEO_COLS: &str =
    "id, class_id, subject_id, topic_id, title, status, external_id, created_at, updated_at";

fn row_to_video(row: &libsql::Row) -> Result<Video, DatabaseError> {
    Ok(Video {
        id: row.get(0)?,
        class_id: row.get(1)?,
        subject_id: row.get(2)?,
        topic_id: row.get(3)?,
        title: row.get(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        external_id: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl ReelService {
    /// Register a video for a topic in `pending` status.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the topic does not exist, or
    /// `DatabaseError::InvalidState` if the topic is not under the given
    /// subject and class.
    pub async fn create_video(
        &self,
        class_id: &str,
        subject_id: &str,
        topic_id: &str,
        title: &str,
    ) -> Result<Video, DatabaseError> {
        let topic = self.get_topic(topic_id).await?;
        let subject = self.get_subject(&topic.subject_id).await?;
        if subject.id != subject_id || subject.class_id != class_id {
            return Err(DatabaseError::InvalidState(format!(
                "topic {topic_id} belongs to {}/{}, not {class_id}/{subject_id}",
                subject.class_id, subject.id
            )));
        }

        let id = self.db().generate_id(PREFIX_VIDEO).await?;
        let now = Utc::now();
        let status = VideoStatus::Pending;

        let sql = format!(
            "INSERT INTO videos ({VIDEO_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, ?7, ?7)"
        );
        self.db()
            .conn()
            .execute(
                &sql,
                libsql::params![
                    id.as_str(),
                    class_id,
                    subject_id,
                    topic_id,
                    title,
                    status.as_str(),
                    format_timestamp(&now),
                ],
            )
            .await?;

        Ok(Video {
            id,
            class_id: class_id.to_string(),
            subject_id: subject_id.to_string(),
            topic_id: topic_id.to_string(),
            title: title.to_string(),
            status,
            external_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the video does not exist.
    pub async fn get_video(&self, id: &str) -> Result<Video, DatabaseError> {
        let sql = format!("SELECT {VIDEO_COLS} FROM videos WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_video(&row)
    }

    /// Move a video to `rendered` or `failed`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the move is not allowed from
    /// the current status, or if the target is `uploaded` (use
    /// [`Self::mark_uploaded`]).
    pub async fn transition_video(
        &self,
        id: &str,
        status: VideoStatus,
    ) -> Result<Video, DatabaseError> {
        if status == VideoStatus::Uploaded {
            return Err(DatabaseError::InvalidState(format!(
                "video {id} needs a platform id to be uploaded; use mark_uploaded"
            )));
        }
        self.set_video_status(id, status, None).await
    }

    /// Publish a rendered video under its platform ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` unless the video is `rendered`
    /// and `external_id` is non-blank.
    pub async fn mark_uploaded(&self, id: &str, external_id: &str) -> Result<Video, DatabaseError> {
        if external_id.trim().is_empty() {
            return Err(DatabaseError::InvalidState(
                "external id must not be empty".to_string(),
            ));
        }
        self.set_video_status(id, VideoStatus::Uploaded, Some(external_id))
            .await
    }

    async fn set_video_status(
        &self,
        id: &str,
        status: VideoStatus,
        external_id: Option<&str>,
    ) -> Result<Video, DatabaseError> {
        let current = self.get_video(id).await?;
        if !current.status.can_transition_to(status) {
            return Err(DatabaseError::InvalidState(format!(
                "video {id} cannot move from {} to {status}",
                current.status
            )));
        }

        let now = Utc::now();
        // Compare-and-set on the status read above.
        let updated = self
            .db()
            .conn()
            .execute(
                "UPDATE videos \
                 SET status = ?1, external_id = COALESCE(?2, external_id), updated_at = ?3 \
                 WHERE id = ?4 AND status = ?5",
                libsql::params![
                    status.as_str(),
                    external_id,
                    format_timestamp(&now),
                    id,
                    current.status.as_str(),
                ],
            )
            .await?;
        if updated == 0 {
            return Err(DatabaseError::InvalidState(format!(
                "video {id} changed status concurrently"
            )));
        }

        tracing::debug!(
            video_id = id,
            from = %current.status,
            to = %status,
            "video status changed"
        );
        Ok(Video {
            status,
            external_id: external_id.map(String::from).or(current.external_id),
            updated_at: now,
            ..current
        })
    }

    /// Videos produced for a topic, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_videos(&self, topic_id: &str) -> Result<Vec<Video>, DatabaseError> {
        let sql = format!(
            "SELECT {VIDEO_COLS} FROM videos WHERE topic_id = ?1 \
             ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self.db().conn().query(&sql, [topic_id]).await?;

        let mut videos = Vec::new();
        while let Some(row) = rows.next().await? {
            videos.push(row_to_video(&row)?);
        }
        Ok(videos)
    }
}
