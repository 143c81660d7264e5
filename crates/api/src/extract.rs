//! Request extractors shared by the API routes.

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// JSON body extractor whose rejection carries the failure envelope.
///
/// Axum's stock `Json` answers a malformed or incomplete body with a
/// plain-text 422 before the handler runs. Routing the rejection through
/// [`ApiError::Validation`] keeps every client-visible failure in the
/// `{ success, message }` envelope with status 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
