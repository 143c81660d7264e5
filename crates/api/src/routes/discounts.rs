//! Discount API handlers.

use axum::{Router, extract::State, routing::get};
use rust_decimal::Decimal;

use crate::db::DiscountRepository;
use crate::error::ApiError;
use crate::extract::Json;
use crate::models::{Discount, NewDiscount};
use crate::response::{ApiSuccess, ok};
use crate::state::AppState;

/// Build the discounts router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/discounts", get(list).post(create))
}

/// List non-deleted discounts, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<Vec<Discount>>>, ApiError> {
    let discounts = DiscountRepository::new(state.pool()).list().await?;
    Ok(ok(discounts))
}

/// Create a discount.
///
/// # Errors
///
/// Returns a validation error for an empty code or out-of-range percentage,
/// a conflict for a duplicate code, or a database error otherwise.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDiscount>,
) -> Result<Json<ApiSuccess<Discount>>, ApiError> {
    if body.code.trim().is_empty() {
        return Err(ApiError::Validation("code is required".to_string()));
    }
    if body.percent_off <= Decimal::ZERO || body.percent_off > Decimal::ONE_HUNDRED {
        return Err(ApiError::Validation(
            "percent_off must be between 0 and 100".to_string(),
        ));
    }

    let discount = DiscountRepository::new(state.pool()).create(&body).await?;
    Ok(ok(discount))
}
