//! Handlers for the `/category-articles` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::category_article::CategoryArticleInput;
use codetech_db::repositories::CategoryArticleRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{not_found, IdPath};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse};
use crate::state::AppState;

#[derive(Debug, Validate)]
pub struct CategoryArticleForm {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
}

impl FromPayload for CategoryArticleForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            category: payload.text("category"),
        })
    }
}

/// GET /api/category-articles
pub async fn list_category_articles(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryArticleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/admin/category-articles
pub async fn create_category_article(
    user: AuthUser,
    State(state): State<AppState>,
    payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: CategoryArticleForm = payload.validated()?;

    let category = CategoryArticleRepo::create(
        &state.pool,
        &CategoryArticleInput {
            category: form.category,
        },
    )
    .await?;

    tracing::info!(
        id = category.id,
        category = %category.category,
        user_id = user.user_id,
        "Article category created",
    );
    Ok(response::created())
}

/// PUT /api/admin/category-articles/{id}
pub async fn update_category_article(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: CategoryArticleForm = payload.validated()?;

    CategoryArticleRepo::update(
        &state.pool,
        id,
        &CategoryArticleInput {
            category: form.category,
        },
    )
    .await?
    .ok_or_else(|| not_found("CategoryArticle", id))?;

    tracing::info!(id, user_id = user.user_id, "Article category updated");
    Ok(response::updated())
}

/// DELETE /api/admin/category-articles/{id}
///
/// `409` while articles still reference the category.
pub async fn delete_category_article(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !CategoryArticleRepo::delete(&state.pool, id).await? {
        return Err(not_found("CategoryArticle", id));
    }

    tracing::info!(id, user_id = user.user_id, "Article category deleted");
    Ok(response::deleted())
}
