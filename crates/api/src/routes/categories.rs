//! Category API handlers.

use axum::{Router, extract::State, routing::get};

use crate::db::CategoryRepository;
use crate::error::ApiError;
use crate::extract::Json;
use crate::models::{Category, NewCategory};
use crate::response::{ApiSuccess, ok};
use crate::state::AppState;

/// Build the categories router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/categories", get(list).post(create))
}

/// List non-deleted categories, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<Vec<Category>>>, ApiError> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(ok(categories))
}

/// Create a category.
///
/// # Errors
///
/// Returns a validation error for an empty name or slug, a conflict for a
/// duplicate slug, or a database error otherwise.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCategory>,
) -> Result<Json<ApiSuccess<Category>>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if body.slug.trim().is_empty() {
        return Err(ApiError::Validation("slug is required".to_string()));
    }

    let category = CategoryRepository::new(state.pool()).create(&body).await?;
    Ok(ok(category))
}
