//! Handlers for the `/portfolios` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::portfolio::PortfolioInput;
use codetech_db::repositories::PortfolioRepo;
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
pub struct PortfolioForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

impl FromPayload for PortfolioForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.text("title"),
            url: payload.text("url"),
        })
    }
}

/// GET /api/portfolios
pub async fn list_portfolios(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let portfolios = PortfolioRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: portfolios }))
}

/// POST /api/admin/portfolios
pub async fn create_portfolio(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: PortfolioForm = payload.validated()?;

    let image = store_required(&state.assets, payload.take_file("image"), "Image").await?;
    let input = PortfolioInput {
        title: form.title,
        url: form.url,
        image,
    };

    let portfolio = commit_with_asset(&state.assets, Some(&input.image), async {
        PortfolioRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(id = portfolio.id, user_id = user.user_id, "Portfolio created");
    Ok(response::created())
}

/// PUT /api/admin/portfolios/{id}
pub async fn update_portfolio(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: PortfolioForm = payload.validated()?;

    let existing = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Portfolio", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("image")).await?;
    let input = PortfolioInput {
        title: form.title,
        url: form.url,
        image: fresh.clone().unwrap_or_else(|| existing.image.clone()),
    };

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        PortfolioRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Portfolio", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.image, fresh.as_deref()).await;

    tracing::info!(id, user_id = user.user_id, "Portfolio updated");
    Ok(response::updated())
}

/// DELETE /api/admin/portfolios/{id}
pub async fn delete_portfolio(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Portfolio", id))?;

    if !PortfolioRepo::delete(&state.pool, id).await? {
        return Err(not_found("Portfolio", id));
    }
    state.assets.release(&existing.image).await;

    tracing::info!(id, user_id = user.user_id, "Portfolio deleted");
    Ok(response::deleted())
}
