//! Subject repository.
//!
//! Each subject carries a `position` within its class, assigned on insert as
//! one past the current maximum. Catalog order is position order.

use chrono::Utc;

use reel_core::entities::Subject;
use reel_core::errors::validate_name;
use reel_core::ids::PREFIX_SUBJECT;

use crate::error::{DatabaseError, map_unique};
use crate::helpers::{format_timestamp, parse_datetime};
use crate::service::ReelService;

const SUBJECT_COLS: &str = "id, class_id, name, created_at";

fn row_to_subject(row: &libsql::Row) -> Result<Subject, DatabaseError> {
    Ok(Subject {
        id: row.get(0)?,
        class_id: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ReelService {
    /// Append a subject to the end of a class's catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the class does not exist, or
    /// `DatabaseError::InvalidState` if the class already has a subject with
    /// this name.
    pub async fn create_subject(
        &self,
        class_id: &str,
        name: &str,
    ) -> Result<Subject, DatabaseError> {
        validate_name("subject", name)?;
        let class = self.get_class(class_id).await?;
        let id = self.db().generate_id(PREFIX_SUBJECT).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO subjects (id, class_id, name, position, created_at) \
                 VALUES (?1, ?2, ?3, \
                   (SELECT COALESCE(MAX(position), 0) + 1 FROM subjects WHERE class_id = ?2), \
                   ?4)",
                libsql::params![id.as_str(), class_id, name, format_timestamp(&now)],
            )
            .await
            .map_err(|e| map_unique(e, || format!("subject '{name}' in {}", class.name)))?;

        Ok(Subject {
            id,
            class_id: class_id.to_string(),
            name: name.to_string(),
            created_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the subject does not exist.
    pub async fn get_subject(&self, id: &str) -> Result<Subject, DatabaseError> {
        let sql = format!("SELECT {SUBJECT_COLS} FROM subjects WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_subject(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn find_subject_by_name(
        &self,
        class_id: &str,
        name: &str,
    ) -> Result<Option<Subject>, DatabaseError> {
        let sql = format!("SELECT {SUBJECT_COLS} FROM subjects WHERE class_id = ?1 AND name = ?2");
        let mut rows = self.db().conn().query(&sql, [class_id, name]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_subject(&row)?)),
            None => Ok(None),
        }
    }

    /// Subjects of a class in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_subjects(&self, class_id: &str) -> Result<Vec<Subject>, DatabaseError> {
        let sql =
            format!("SELECT {SUBJECT_COLS} FROM subjects WHERE class_id = ?1 ORDER BY position");
        let mut rows = self.db().conn().query(&sql, [class_id]).await?;

        let mut subjects = Vec::new();
        while let Some(row) = rows.next().await? {
            subjects.push(row_to_subject(&row)?);
        }
        Ok(subjects)
    }

    /// Delete a subject together with its topics and their videos.
    ///
    /// Usage records are kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the subject does not exist.
    pub async fn delete_subject(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM subjects WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(subject_id = id, "deleted subject");
        Ok(())
    }
}
