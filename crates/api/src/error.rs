use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use codetech_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `codetech_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level validation failures from a typed form.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request body axum refused to decode; keeps the extractor's status
    /// (`413` for an oversized upload, `400` for a malformed body).
    #[error("Rejected body: {message}")]
    Rejected { status: StatusCode, message: String },

    /// A lookup by something other than a numeric id found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned for any authentication failure on protected routes.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Message returned when a singleton row or unique value already exists.
pub const ALREADY_EXISTS: &str = "Data already exists";

impl AppError {
    /// `409` for a second row of a singleton entity.
    pub fn already_exists() -> Self {
        AppError::Core(CoreError::Conflict(ALREADY_EXISTS.into()))
    }

    /// Body rejection from an axum extractor.
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Rejected {
            status,
            message: message.into(),
        }
    }

    /// `401` with the undifferentiated auth failure message.
    pub fn unauthorized() -> Self {
        AppError::Core(CoreError::Unauthorized(UNAUTHORIZED.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Asset storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORAGE_ERROR",
                        "Failed to store file".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Rejected { status, message } => {
                let code = match *status {
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    _ => "BAD_REQUEST",
                };
                (*status, code, message.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
            AppError::Validation(errors) => return validation_response(errors),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });

        if status == StatusCode::INTERNAL_SERVER_ERROR && cfg!(debug_assertions) {
            body["detail"] = json!(self.to_string());
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Validation failures carry a per-field message list.
fn validation_response(errors: &validator::ValidationErrors) -> Response {
    let body = json!({
        "error": "Invalid input",
        "code": "VALIDATION_ERROR",
        "errors": validation_messages(errors),
    });
    (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Flatten validator output into sorted human-readable messages.
///
/// Rules without a custom message fall back to `"<field> is invalid"`.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 409 when deleting a referenced row and to
///   400 when a write points at a missing row.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("uq_") {
                        let message = match constraint {
                            "uq_users_email" => "Email already exists",
                            _ => ALREADY_EXISTS,
                        };
                        return (StatusCode::CONFLICT, "CONFLICT", message.to_string());
                    }
                }
                // PostgreSQL foreign key violation
                Some("23503") => {
                    if db_err.message().starts_with("update or delete") {
                        return (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            "Data is still referenced by other records".to_string(),
                        );
                    }
                    return (
                        StatusCode::BAD_REQUEST,
                        "BAD_REQUEST",
                        "Referenced data does not exist".to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
