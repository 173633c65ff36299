//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"error": "message"}`. Every request is isolated; no
//! failure is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use nutriverse_core::FoodError;

/// Application-level error type that implements `IntoResponse`.
///
/// Each variant maps to an HTTP status code:
/// - `NotFound` → 404
/// - `InvalidAction` → 400
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    /// Unknown slug or food id (404).
    NotFound(String),
    /// Unrecognised or malformed POST action (400).
    InvalidAction(String),
    /// Unexpected failure during data access or serialization (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidAction(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<FoodError> for ApiError {
    fn from(err: FoodError) -> Self {
        match err {
            FoodError::SlugNotFound(_) => ApiError::NotFound("Food not found".into()),
            other => {
                tracing::error!("food store error: {:?}", other);
                ApiError::Internal("Internal error".into())
            }
        }
    }
}
