//! # REST API Errors
//!
//! Maps storage outcomes and request validation failures to HTTP status
//! codes: 400 for validation/conflict, 404 for lookup misses, 500 for
//! anything unexpected. Every error body is `{ "error": "<message>" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::storage::StorageError;

use super::response::ErrorResponse;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A storage operation returned an error signal
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// Required body fields were absent or empty
    #[error("{0} required")]
    MissingFields(&'static str),

    /// Unexpected internal failure (e.g. poisoned lock)
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request: validation and uniqueness conflicts
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(e) if e.is_conflict() => StatusCode::BAD_REQUEST,

            // 404 Not Found: record and relation lookup misses
            ApiError::Storage(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
