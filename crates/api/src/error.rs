//! HTTP error type and its JSON rendering.
//!
//! Every error body carries `error` (human-readable) and `code` (stable,
//! machine-readable). Capacity rejections additionally carry `message` and
//! `remaining` for the booking form.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use venue_core::error::CoreError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `venue_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Logged in full; the client only sees a generic message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const GENERIC_FAILURE: &str = "An internal error occurred";

/// Log `detail` and produce the sanitized 500 triple.
fn internal(detail: &dyn std::fmt::Display) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %detail, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        GENERIC_FAILURE.to_string(),
    )
}

impl AppError {
    /// Status, error code and client-facing message for this error.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        let mut body = json!({
            "error": message,
            "code": code,
        });

        if let AppError::Core(CoreError::CapacityExceeded { remaining }) = &self {
            body["message"] = json!(format!("Only {remaining} spots left for this date."));
            body["remaining"] = json!(remaining);
        }

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::CapacityExceeded { .. } => (
            StatusCode::BAD_REQUEST,
            "CAPACITY_EXCEEDED",
            "Daily capacity reached".to_string(),
        ),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => internal(msg),
    }
}

/// - `RowNotFound` maps to 404.
/// - Foreign key violations (`23503`) map to 400: the request referenced a
///   row that does not exist, e.g. a pack deleted mid-request.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!(
                "Referenced record does not exist: {}",
                db_err.constraint().unwrap_or("unknown")
            ),
        ),
        other => internal(other),
    }
}
