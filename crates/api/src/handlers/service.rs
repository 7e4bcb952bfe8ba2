//! Handlers for the `/services` resource. Slugs follow the title.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::service::ServiceInput;
use codetech_db::repositories::ServiceRepo;
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
pub struct ServiceForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl FromPayload for ServiceForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.text("title"),
            description: payload.text("description"),
        })
    }
}

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/admin/services
pub async fn create_service(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ServiceForm = payload.validated()?;

    let icon = store_required(&state.assets, payload.take_file("icon"), "Icon").await?;
    let input = ServiceInput {
        title: form.title,
        description: form.description,
        icon,
    };

    let service = commit_with_asset(&state.assets, Some(&input.icon), async {
        ServiceRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(
        id = service.id,
        slug = %service.slug,
        user_id = user.user_id,
        "Service created",
    );
    Ok(response::created())
}

/// PUT /api/admin/services/{id}
pub async fn update_service(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ServiceForm = payload.validated()?;

    let existing = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Service", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("icon")).await?;
    let input = ServiceInput {
        title: form.title,
        description: form.description,
        icon: fresh.clone().unwrap_or_else(|| existing.icon.clone()),
    };

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        ServiceRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Service", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.icon, fresh.as_deref()).await;

    tracing::info!(id, user_id = user.user_id, "Service updated");
    Ok(response::updated())
}

/// DELETE /api/admin/services/{id}
pub async fn delete_service(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Service", id))?;

    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(not_found("Service", id));
    }
    state.assets.release(&existing.icon).await;

    tracing::info!(id, user_id = user.user_id, "Service deleted");
    Ok(response::deleted())
}
