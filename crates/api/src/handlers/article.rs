//! Handlers for the `/articles` resource.
//!
//! Articles belong to an author (`user_id`) and a category (`category_id`);
//! listings join both labels in. The public view counter is keyed by slug.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use codetech_core::types::DbId;
use codetech_db::models::article::ArticleInput;
use codetech_db::repositories::ArticleRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{
    commit_with_asset, not_found, release_superseded, store_optional, store_required, IdPath,
};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Validate)]
pub struct ArticleForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<DbId>,
    #[validate(required(message = "category_id is required"))]
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl FromPayload for ArticleForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.text("title"),
            user_id: payload.int("user_id", "user_id")?,
            category_id: payload.int("category_id", "category_id")?,
            description: payload.text("description"),
        })
    }
}

impl ArticleForm {
    fn into_input(self, thumbnail: String) -> ArticleInput {
        // Presence of both ids is enforced by `validate`.
        ArticleInput {
            title: self.title,
            user_id: self.user_id.unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
            description: self.description,
            thumbnail,
        }
    }
}

/// GET /api/articles
pub async fn list_articles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: articles }))
}

/// GET /api/articles/{slug}/views
///
/// Public view counter; `404` for an unknown slug.
pub async fn increment_views(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !ArticleRepo::increment_views(&state.pool, &slug).await? {
        return Err(AppError::NotFound(format!("Article '{slug}' not found")));
    }

    tracing::debug!(%slug, "Article view counted");
    Ok(Json(MessageResponse {
        message: "Views updated +1",
    }))
}

/// POST /api/admin/articles
///
/// Multipart with a required `thumbnail` file.
pub async fn create_article(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ArticleForm = payload.validated()?;

    let thumbnail =
        store_required(&state.assets, payload.take_file("thumbnail"), "Thumbnail").await?;
    let input = form.into_input(thumbnail);

    let article = commit_with_asset(&state.assets, Some(&input.thumbnail), async {
        ArticleRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(
        id = article.id,
        slug = %article.slug,
        author_id = article.user_id,
        user_id = user.user_id,
        "Article created",
    );
    Ok(response::created())
}

/// PUT /api/admin/articles/{id}
///
/// Every field is required again; the thumbnail is kept unless replaced.
pub async fn update_article(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ArticleForm = payload.validated()?;

    let existing = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Article", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("thumbnail")).await?;
    let input = form.into_input(fresh.clone().unwrap_or_else(|| existing.thumbnail.clone()));

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        ArticleRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Article", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.thumbnail, fresh.as_deref()).await;

    tracing::info!(id, user_id = user.user_id, "Article updated");
    Ok(response::updated())
}

/// DELETE /api/admin/articles/{id}
pub async fn delete_article(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Article", id))?;

    if !ArticleRepo::delete(&state.pool, id).await? {
        return Err(not_found("Article", id));
    }
    state.assets.release(&existing.thumbnail).await;

    tracing::info!(id, user_id = user.user_id, "Article deleted");
    Ok(response::deleted())
}
