//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can hit ends up as an [`AppError`]. The response
//! bodies are part of the public API contract and always have the shape
//! `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for any rejected submission.
pub const INVALID_URL_MESSAGE: &str = "invalid url";
/// Message returned when a short identifier has no record.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found";
/// Message returned for persistence failures.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Errors produced by validation, lookup and persistence.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The candidate failed URL parsing, used a disallowed scheme, or was missing.
    #[error("invalid url")]
    InvalidUrl,

    /// The candidate parsed correctly but its host did not resolve.
    #[error("host `{host}` could not be resolved")]
    UnresolvableHost { host: String },

    /// No record matches the requested short identifier.
    #[error("no short URL found")]
    NotFound,

    /// The persistence layer failed.
    #[error("store error: {0}")]
    Store(String),
}

impl AppError {
    /// Caller-facing message for this error.
    ///
    /// Malformed and unresolvable URLs share one message so DNS details
    /// are never exposed to clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidUrl | AppError::UnresolvableHost { .. } => INVALID_URL_MESSAGE,
            AppError::NotFound => NOT_FOUND_MESSAGE,
            AppError::Store(_) => SERVER_ERROR_MESSAGE,
        }
    }

    /// HTTP status for this error.
    ///
    /// Rejected submissions are reported with `200 OK`; clients of this API
    /// inspect the `error` field instead of the status line.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::UnresolvableHost { .. } => StatusCode::OK,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(ref details) = self {
            tracing::error!("Store failure: {}", details);
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
