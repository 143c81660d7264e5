//! Product API handlers.

use std::collections::HashMap;

use axum::{
    Router,
    extract::{Query, State},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use verdant_core::{CategoryId, ProductId, parse_ids_lenient};

use crate::db::ProductRepository;
use crate::error::ApiError;
use crate::extract::Json;
use crate::models::{NewProduct, Product};
use crate::response::{ApiSuccess, ok};
use crate::state::AppState;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/by-ids", post(by_ids))
}

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category_id: Option<CategoryId>,
}

/// Request body for fetching products by ID list.
#[derive(Debug, Deserialize)]
pub struct ByIdsRequest {
    pub ids: Vec<String>,
}

/// List non-deleted products, newest first, optionally filtered by category.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiSuccess<Vec<Product>>>, ApiError> {
    let products = ProductRepository::new(state.pool())
        .list(query.category_id)
        .await?;
    Ok(ok(products))
}

/// Create a product.
///
/// # Errors
///
/// Returns a validation error for an empty name or negative price, or a
/// database error otherwise.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<Json<ApiSuccess<Product>>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if body.price < Decimal::ZERO {
        return Err(ApiError::Validation(
            "price must not be negative".to_string(),
        ));
    }

    let product = ProductRepository::new(state.pool()).create(&body).await?;
    Ok(ok(product))
}

/// Fetch products by ID, returned in the caller's order.
///
/// Ids that are not valid UUIDs or match no live row are silently dropped.
///
/// # Errors
///
/// Returns a validation error for an empty `ids` array, or a database error
/// if the fetch fails.
pub async fn by_ids(
    State(state): State<AppState>,
    Json(body): Json<ByIdsRequest>,
) -> Result<Json<ApiSuccess<Vec<Product>>>, ApiError> {
    if body.ids.is_empty() {
        return Err(ApiError::Validation("ids array cannot be empty".to_string()));
    }

    let ids: Vec<ProductId> = parse_ids_lenient(&body.ids);
    if ids.is_empty() {
        return Ok(ok(Vec::new()));
    }

    let products = ProductRepository::new(state.pool()).get_by_ids(&ids).await?;
    Ok(ok(reorder_by_ids(&ids, products)))
}

/// Reorder fetched products to match the requested ID order, dropping ids
/// with no matching row.
fn reorder_by_ids(ids: &[ProductId], products: Vec<Product>) -> Vec<Product> {
    let mut by_id: HashMap<ProductId, Product> =
        products.into_iter().map(|p| (p.id, p)).collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(id: ProductId, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price: Decimal::new(1000, 2),
            category_id: None,
            image_path: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_reorder_matches_input_order() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        let fetched = vec![product(a, "a"), product(b, "b")];

        let ordered = reorder_by_ids(&[b, a], fetched);
        let names: Vec<_> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_drops_unmatched_ids() {
        let a = ProductId::generate();
        let missing = ProductId::generate();
        let fetched = vec![product(a, "a")];

        let ordered = reorder_by_ids(&[missing, a], fetched);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered.first().map(|p| p.id), Some(a));
    }

    #[test]
    fn test_reorder_handles_duplicate_ids() {
        // A repeated id yields the row once, at its first position
        let a = ProductId::generate();
        let fetched = vec![product(a, "a")];

        let ordered = reorder_by_ids(&[a, a], fetched);
        assert_eq!(ordered.len(), 1);
    }

    #[test]
    fn test_reorder_empty() {
        assert!(reorder_by_ids(&[], Vec::new()).is_empty());
    }
}
