//! Settings store database operations.
//!
//! A generic key/tab/JSONB table. `key` is unique across the whole table
//! regardless of `tab`; upsert replaces `tab` and `data` wholesale. Unlike
//! the catalog tables there is no soft delete here.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::SettingRecord;

/// Internal row type for `PostgreSQL` settings queries.
#[derive(Debug, sqlx::FromRow)]
struct SettingRow {
    key: String,
    tab: String,
    data: JsonValue,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SettingRow> for SettingRecord {
    fn from(row: SettingRow) -> Self {
        Self {
            key: row.key,
            tab: row.tab,
            data: row.data,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for settings store operations.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all settings records, optionally filtered by tab, most recently
    /// updated first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, tab: Option<&str>) -> Result<Vec<SettingRecord>, RepositoryError> {
        let rows: Vec<SettingRow> = match tab {
            Some(tab) => {
                sqlx::query_as(
                    r"
                    SELECT key, tab, data, created_at, updated_at
                    FROM setting
                    WHERE tab = $1
                    ORDER BY updated_at DESC
                    ",
                )
                .bind(tab)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r"
                    SELECT key, tab, data, created_at, updated_at
                    FROM setting
                    ORDER BY updated_at DESC
                    ",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a single settings record by key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, key: &str) -> Result<Option<SettingRecord>, RepositoryError> {
        let row: Option<SettingRow> = sqlx::query_as(
            r"
            SELECT key, tab, data, created_at, updated_at
            FROM setting
            WHERE key = $1
            ",
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a settings record, or replace the existing one with the same
    /// key. Both `tab` and `data` are overwritten; there is no merge.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(
        &self,
        key: &str,
        tab: &str,
        data: &JsonValue,
    ) -> Result<SettingRecord, RepositoryError> {
        let row: SettingRow = sqlx::query_as(
            r"
            INSERT INTO setting (key, tab, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET tab = $2, data = $3, updated_at = NOW()
            RETURNING key, tab, data, created_at, updated_at
            ",
        )
        .bind(key)
        .bind(tab)
        .bind(data)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Delete a settings record by key. Deleting an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM setting
            WHERE key = $1
            ",
        )
        .bind(key)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
