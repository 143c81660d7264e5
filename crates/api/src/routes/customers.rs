//! Customer API handlers.

use axum::{Router, extract::State, routing::get};

use verdant_core::Email;

use crate::db::CustomerRepository;
use crate::error::ApiError;
use crate::extract::Json;
use crate::models::{Customer, NewCustomer};
use crate::response::{ApiSuccess, ok};
use crate::state::AppState;

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/customers", get(list).post(create))
}

/// List non-deleted customers, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<Vec<Customer>>>, ApiError> {
    let customers = CustomerRepository::new(state.pool()).list().await?;
    Ok(ok(customers))
}

/// Create a customer.
///
/// # Errors
///
/// Returns a validation error for an invalid email or empty name, a
/// conflict for a duplicate email, or a database error otherwise.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCustomer>,
) -> Result<Json<ApiSuccess<Customer>>, ApiError> {
    let email = Email::parse(body.email.trim())
        .map_err(|e| ApiError::Validation(format!("invalid email: {e}")))?;
    if body.first_name.trim().is_empty() {
        return Err(ApiError::Validation("first_name is required".to_string()));
    }
    if body.last_name.trim().is_empty() {
        return Err(ApiError::Validation("last_name is required".to_string()));
    }

    let customer = CustomerRepository::new(state.pool())
        .create(
            &email,
            body.first_name.trim(),
            body.last_name.trim(),
            body.phone.as_deref(),
        )
        .await?;
    Ok(ok(customer))
}
