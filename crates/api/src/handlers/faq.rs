//! Handlers for the `/faqs` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_core::types::DbId;
use codetech_db::models::faq::FaqInput;
use codetech_db::repositories::FaqRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{not_found, IdPath};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse};
use crate::state::AppState;

#[derive(Debug, Validate)]
pub struct FaqForm {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    #[validate(required(message = "category_id is required"))]
    pub category_id: Option<DbId>,
}

impl FromPayload for FaqForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            question: payload.text("question"),
            answer: payload.text("answer"),
            category_id: payload.int("category_id", "category_id")?,
        })
    }
}

impl From<FaqForm> for FaqInput {
    fn from(form: FaqForm) -> Self {
        Self {
            question: form.question,
            answer: form.answer,
            // Presence is enforced by `validate`.
            category_id: form.category_id.unwrap_or_default(),
        }
    }
}

/// GET /api/faqs
///
/// FAQs joined with their category label.
pub async fn list_faqs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let faqs = FaqRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// POST /api/admin/faqs
pub async fn create_faq(
    user: AuthUser,
    State(state): State<AppState>,
    payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: FaqForm = payload.validated()?;

    let faq = FaqRepo::create(&state.pool, &form.into()).await?;

    tracing::info!(
        id = faq.id,
        category_id = faq.category_id,
        user_id = user.user_id,
        "FAQ created",
    );
    Ok(response::created())
}

/// PUT /api/admin/faqs/{id}
pub async fn update_faq(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: FaqForm = payload.validated()?;

    FaqRepo::update(&state.pool, id, &form.into())
        .await?
        .ok_or_else(|| not_found("Faq", id))?;

    tracing::info!(id, user_id = user.user_id, "FAQ updated");
    Ok(response::updated())
}

/// DELETE /api/admin/faqs/{id}
pub async fn delete_faq(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !FaqRepo::delete(&state.pool, id).await? {
        return Err(not_found("Faq", id));
    }

    tracing::info!(id, user_id = user.user_id, "FAQ deleted");
    Ok(response::deleted())
}
