//! Class repository.
//!
//! Classes are the root of the curriculum. They are never renamed, and a
//! class cannot be deleted while subjects reference it.

use chrono::Utc;

use reel_core::entities::Class;
use reel_core::errors::validate_name;
use reel_core::ids::PREFIX_CLASS;

use crate::error::{DatabaseError, map_unique};
use crate::helpers::{format_timestamp, get_count, parse_datetime};
use crate::service::ReelService;

fn row_to_class(row: &libsql::Row) -> Result<Class, DatabaseError> {
    Ok(Class {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl ReelService {
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if a class with this name exists.
    pub async fn create_class(&self, name: &str) -> Result<Class, DatabaseError> {
        validate_name("class", name)?;
        let id = self.db().generate_id(PREFIX_CLASS).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO classes (id, name, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), name, format_timestamp(&now)],
            )
            .await
            .map_err(|e| map_unique(e, || format!("class '{name}'")))?;

        Ok(Class {
            id,
            name: name.to_string(),
            created_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the class does not exist.
    pub async fn get_class(&self, id: &str) -> Result<Class, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, created_at FROM classes WHERE id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_class(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn find_class_by_name(&self, name: &str) -> Result<Option<Class>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, created_at FROM classes WHERE name = ?1", [name])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_class(&row)?)),
            None => Ok(None),
        }
    }

    /// All classes in creation order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_classes(&self) -> Result<Vec<Class>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, created_at FROM classes ORDER BY created_at, rowid", ())
            .await?;

        let mut classes = Vec::new();
        while let Some(row) = rows.next().await? {
            classes.push(row_to_class(&row)?);
        }
        Ok(classes)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` while subjects reference the class,
    /// or `DatabaseError::NoResult` if it does not exist.
    pub async fn delete_class(&self, id: &str) -> Result<(), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM subjects WHERE class_id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let subjects = get_count(&row, 0)?;
        if subjects > 0 {
            return Err(DatabaseError::InvalidState(format!(
                "class {id} still has {subjects} subject(s)"
            )));
        }

        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM classes WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}
