//! Handlers for the `/pages` resource.
//!
//! Every page carries a banner image and a slug derived from its title.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::page::PageInput;
use codetech_db::repositories::PageRepo;
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
pub struct PageForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "type is required"))]
    pub page_type: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl FromPayload for PageForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.text("title"),
            page_type: payload.text("type"),
            description: payload.text("description"),
        })
    }
}

impl PageForm {
    fn into_input(self, banner: String) -> PageInput {
        PageInput {
            title: self.title,
            page_type: self.page_type,
            description: self.description,
            banner,
        }
    }
}

/// GET /api/pages
pub async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /api/admin/pages
///
/// Multipart with a required `banner` file.
pub async fn create_page(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: PageForm = payload.validated()?;

    let banner = store_required(&state.assets, payload.take_file("banner"), "Banner").await?;
    let input = form.into_input(banner);

    let page = commit_with_asset(&state.assets, Some(&input.banner), async {
        PageRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(
        id = page.id,
        slug = %page.slug,
        user_id = user.user_id,
        "Page created",
    );
    Ok(response::created())
}

/// PUT /api/admin/pages/{id}
///
/// Replaces every field; the banner is kept unless a new one is uploaded.
pub async fn update_page(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: PageForm = payload.validated()?;

    let existing = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Page", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("banner")).await?;
    let input = form.into_input(fresh.clone().unwrap_or_else(|| existing.banner.clone()));

    let page = commit_with_asset(&state.assets, fresh.as_deref(), async {
        PageRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Page", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.banner, fresh.as_deref()).await;

    tracing::info!(id, slug = %page.slug, user_id = user.user_id, "Page updated");
    Ok(response::updated())
}

/// DELETE /api/admin/pages/{id}
pub async fn delete_page(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Page", id))?;

    if !PageRepo::delete(&state.pool, id).await? {
        return Err(not_found("Page", id));
    }
    state.assets.release(&existing.banner).await;

    tracing::info!(id, user_id = user.user_id, "Page deleted");
    Ok(response::deleted())
}
