//! Shared response envelope types for API handlers.
//!
//! Reads use a `{ "data": ... }` envelope; writes answer with a
//! `{ "message": ... }` confirmation and no payload.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `201` after a successful create.
pub fn created() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Data created successfully",
        }),
    )
}

/// `200` after a successful update.
pub fn updated() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Data updated successfully",
    })
}

/// `200` after a successful delete.
pub fn deleted() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Data deleted successfully",
    })
}
