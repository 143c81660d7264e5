//! Product repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use verdant_core::{CategoryId, ProductId};

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Internal row type for `PostgreSQL` product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: Decimal,
    category_id: Option<CategoryId>,
    image_path: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id,
            image_path: row.image_path,
            created_at: row.created_at,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all non-deleted products, newest first, optionally filtered by
    /// category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = match category_id {
            Some(category_id) => {
                sqlx::query_as(
                    r"
                    SELECT id, name, description, price, category_id, image_path, created_at
                    FROM product
                    WHERE deleted_at IS NULL AND category_id = $1
                    ORDER BY created_at DESC
                    ",
                )
                .bind(category_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r"
                    SELECT id, name, description, price, category_id, image_path, created_at
                    FROM product
                    WHERE deleted_at IS NULL
                    ORDER BY created_at DESC
                    ",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Fetch non-deleted products matching any of the given IDs. Result
    /// order is unspecified; callers reorder as needed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        let raw: Vec<Uuid> = ids.iter().map(|id| id.as_uuid()).collect();
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, price, category_id, image_path, created_at
            FROM product
            WHERE deleted_at IS NULL AND id = ANY($1)
            ",
        )
        .bind(raw)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert a new product and return it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails (including a
    /// foreign-key violation for an unknown category).
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(
            r"
            INSERT INTO product (name, description, price, category_id, image_path)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, category_id, image_path, created_at
            ",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.category_id)
        .bind(&new.image_path)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
