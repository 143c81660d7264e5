//! Discount repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use verdant_core::DiscountId;

use super::{RepositoryError, map_unique_violation};
use crate::models::{Discount, NewDiscount};

/// Internal row type for `PostgreSQL` discount queries.
#[derive(Debug, sqlx::FromRow)]
struct DiscountRow {
    id: DiscountId,
    code: String,
    percent_off: Decimal,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<DiscountRow> for Discount {
    fn from(row: DiscountRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            percent_off: row.percent_off,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            created_at: row.created_at,
        }
    }
}

/// Repository for discount database operations.
pub struct DiscountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DiscountRepository<'a> {
    /// Create a new discount repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all non-deleted discounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Discount>, RepositoryError> {
        let rows: Vec<DiscountRow> = sqlx::query_as(
            r"
            SELECT id, code, percent_off, starts_at, ends_at, created_at
            FROM discount
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert a new discount and return it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the code already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new: &NewDiscount) -> Result<Discount, RepositoryError> {
        let row: DiscountRow = sqlx::query_as(
            r"
            INSERT INTO discount (code, percent_off, starts_at, ends_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, percent_off, starts_at, ends_at, created_at
            ",
        )
        .bind(&new.code)
        .bind(new.percent_off)
        .bind(new.starts_at)
        .bind(new.ends_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "discount code already exists"))?;

        Ok(row.into())
    }
}
