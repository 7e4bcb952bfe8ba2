//! Handlers for the `/abouts` resource (singleton company profile).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::about::AboutInput;
use codetech_db::repositories::AboutRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{
    commit_with_asset, not_found, release_superseded, store_optional, store_required, IdPath,
};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse};
use crate::state::AppState;

#[derive(Debug, Validate)]
pub struct AboutForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl FromPayload for AboutForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.text("title"),
            description: payload.text("description"),
        })
    }
}

/// GET /api/abouts
///
/// The about row, or `null` before one has been written.
pub async fn get_about(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::find_first(&state.pool).await?;
    Ok(Json(DataResponse { data: about }))
}

/// POST /api/admin/abouts
///
/// Multipart with a required `image` file. Fails `409` once a row exists.
pub async fn create_about(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: AboutForm = payload.validated()?;

    if AboutRepo::exists(&state.pool).await? {
        return Err(AppError::already_exists());
    }

    let image = store_required(&state.assets, payload.take_file("image"), "Image").await?;
    let input = AboutInput {
        title: form.title,
        description: form.description,
        image,
    };

    // The unique singleton index still guards a concurrent create.
    let about = commit_with_asset(&state.assets, Some(&input.image), async {
        AboutRepo::create_if_absent(&state.pool, &input)
            .await?
            .ok_or_else(AppError::already_exists)
    })
    .await?;

    tracing::info!(id = about.id, user_id = user.user_id, "About created");
    Ok(response::created())
}

/// PUT /api/admin/abouts/{id}
pub async fn update_about(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: AboutForm = payload.validated()?;

    let existing = AboutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("About", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("image")).await?;
    let input = AboutInput {
        title: form.title,
        description: form.description,
        image: fresh.clone().unwrap_or_else(|| existing.image.clone()),
    };

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        AboutRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("About", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.image, fresh.as_deref()).await;

    tracing::info!(id, user_id = user.user_id, "About updated");
    Ok(response::updated())
}

/// DELETE /api/admin/abouts/{id}
pub async fn delete_about(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = AboutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("About", id))?;

    if !AboutRepo::delete(&state.pool, id).await? {
        return Err(not_found("About", id));
    }
    state.assets.release(&existing.image).await;

    tracing::info!(id, user_id = user.user_id, "About deleted");
    Ok(response::deleted())
}
