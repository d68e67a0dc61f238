//! API error types and responses.
//!
//! The error mapping is uniform: any storage failure becomes a 500 with a
//! generic message (the detail is logged, never leaked), missing or invalid
//! request fields become a 400, and not-found lookups become a 404. Bodies
//! are `{ "error": "<message>" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request - missing or invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<topup_store::StoreError> for ApiError {
    fn from(err: topup_store::StoreError) -> Self {
        match err {
            topup_store::StoreError::NotFound { entity, .. } => {
                Self::NotFound(format!("{entity} not found"))
            }
            topup_store::StoreError::Database(msg)
            | topup_store::StoreError::Serialization(msg) => Self::Internal(msg),
        }
    }
}
