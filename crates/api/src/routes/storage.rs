//! Storage signed URL API handlers.

use axum::{Router, extract::State, routing::post};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::Json;
use crate::response::{ApiSuccess, ok};
use crate::services::storage::{DEFAULT_EXPIRES_IN, SignedUrl, validate_object_path};
use crate::state::AppState;

/// Build the storage router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/storage/signed-urls", post(signed_urls))
}

/// Request body for issuing signed URLs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlsRequest {
    pub paths: Vec<String>,
    pub expires_in: Option<u64>,
}

/// Issue time-limited signed URLs for a batch of object paths.
///
/// Validation runs before any signing work: an empty `paths` array or a
/// malformed path is rejected with 400.
///
/// # Errors
///
/// Returns a validation error for an empty batch or an invalid path.
pub async fn signed_urls(
    State(state): State<AppState>,
    Json(body): Json<SignedUrlsRequest>,
) -> Result<Json<ApiSuccess<Vec<SignedUrl>>>, ApiError> {
    if body.paths.is_empty() {
        return Err(ApiError::Validation(
            "paths array cannot be empty".to_string(),
        ));
    }
    for path in &body.paths {
        validate_object_path(path).map_err(ApiError::Validation)?;
    }

    let expires_in = body.expires_in.unwrap_or(DEFAULT_EXPIRES_IN);
    let urls = body
        .paths
        .iter()
        .map(|path| state.signer().issue(path, expires_in))
        .collect();

    Ok(ok(urls))
}
