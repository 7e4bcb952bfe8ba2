//! Handlers for the `/contacts` resource (singleton contact card).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::contact::ContactInput;
use codetech_db::repositories::ContactRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{not_found, IdPath};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse};
use crate::state::AppState;

#[derive(Debug, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "office_operation is required"))]
    pub office_operation: String,
}

impl FromPayload for ContactForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            phone: payload.text("phone"),
            email: payload.text("email"),
            address: payload.text("address"),
            office_operation: payload.text("office_operation"),
        })
    }
}

impl From<ContactForm> for ContactInput {
    fn from(form: ContactForm) -> Self {
        Self {
            phone: form.phone,
            email: form.email,
            address: form.address,
            office_operation: form.office_operation,
        }
    }
}

/// GET /api/contacts
pub async fn get_contact(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::find_first(&state.pool).await?;
    Ok(Json(DataResponse { data: contact }))
}

/// POST /api/admin/contacts
///
/// Only one contact row may exist; a second create is `409`.
pub async fn create_contact(
    user: AuthUser,
    State(state): State<AppState>,
    payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ContactForm = payload.validated()?;

    let contact = ContactRepo::create_if_absent(&state.pool, &form.into())
        .await?
        .ok_or_else(AppError::already_exists)?;

    tracing::info!(id = contact.id, user_id = user.user_id, "Contact created");
    Ok(response::created())
}

/// PUT /api/admin/contacts/{id}
pub async fn update_contact(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ContactForm = payload.validated()?;

    ContactRepo::update(&state.pool, id, &form.into())
        .await?
        .ok_or_else(|| not_found("Contact", id))?;

    tracing::info!(id, user_id = user.user_id, "Contact updated");
    Ok(response::updated())
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete_contact(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found("Contact", id));
    }

    tracing::info!(id, user_id = user.user_id, "Contact deleted");
    Ok(response::deleted())
}
