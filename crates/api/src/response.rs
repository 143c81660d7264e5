//! JSON response envelope shared by every API route.
//!
//! Success bodies are `{ "success": true, "data": <payload> }`; failures are
//! `{ "success": false, "message": <string> }` (built by [`crate::error`]).

use serde::Serialize;

use crate::extract::Json;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

/// Failure response envelope.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
}

/// Wrap a payload in the success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<ApiSuccess<T>> {
    Json(ApiSuccess {
        success: true,
        data,
    })
}

/// Build a failure envelope body.
#[must_use]
pub fn failure(message: impl Into<String>) -> ApiFailure {
    ApiFailure {
        success: false,
        message: message.into(),
    }
}
