//! Handlers for the `/category-faqs` resource. Each category carries an icon.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::category_faq::CategoryFaqInput;
use codetech_db::repositories::CategoryFaqRepo;
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
pub struct CategoryFaqForm {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

impl FromPayload for CategoryFaqForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            category: payload.text("category"),
            description: payload.text("description"),
        })
    }
}

/// GET /api/category-faqs
pub async fn list_category_faqs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryFaqRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/admin/category-faqs
pub async fn create_category_faq(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: CategoryFaqForm = payload.validated()?;

    let icon = store_required(&state.assets, payload.take_file("icon"), "Icon").await?;
    let input = CategoryFaqInput {
        category: form.category,
        description: form.description,
        icon,
    };

    let category = commit_with_asset(&state.assets, Some(&input.icon), async {
        CategoryFaqRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(id = category.id, user_id = user.user_id, "FAQ category created");
    Ok(response::created())
}

/// PUT /api/admin/category-faqs/{id}
pub async fn update_category_faq(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: CategoryFaqForm = payload.validated()?;

    let existing = CategoryFaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("CategoryFaq", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("icon")).await?;
    let input = CategoryFaqInput {
        category: form.category,
        description: form.description,
        icon: fresh.clone().unwrap_or_else(|| existing.icon.clone()),
    };

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        CategoryFaqRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("CategoryFaq", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.icon, fresh.as_deref()).await;

    tracing::info!(id, user_id = user.user_id, "FAQ category updated");
    Ok(response::updated())
}

/// DELETE /api/admin/category-faqs/{id}
pub async fn delete_category_faq(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = CategoryFaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("CategoryFaq", id))?;

    if !CategoryFaqRepo::delete(&state.pool, id).await? {
        return Err(not_found("CategoryFaq", id));
    }
    state.assets.release(&existing.icon).await;

    tracing::info!(id, user_id = user.user_id, "FAQ category deleted");
    Ok(response::deleted())
}
