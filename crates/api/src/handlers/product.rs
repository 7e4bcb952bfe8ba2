//! Handlers for the `/products` resource.
//!
//! Products are the one asset-bearing entity whose icon is optional.
//! Prices and discounts are integer minor units.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_db::models::product::ProductInput;
use codetech_db::repositories::ProductRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{commit_with_asset, not_found, release_superseded, store_optional, IdPath};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse};
use crate::state::AppState;

#[derive(Debug, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(required(message = "price is required"))]
    pub price: Option<i64>,
    pub discount: Option<i64>,
    #[validate(length(min = 1, message = "type is required"))]
    pub product_type: String,
}

impl FromPayload for ProductForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.text("title"),
            description: payload.text("description"),
            price: payload.int("price", "price")?,
            discount: payload.int("discount", "discount")?,
            product_type: payload.text("type"),
        })
    }
}

impl ProductForm {
    fn into_input(self, icon: String) -> ProductInput {
        ProductInput {
            title: self.title,
            description: self.description,
            // Presence is enforced by `validate`.
            price: self.price.unwrap_or_default(),
            discount: self.discount.unwrap_or(0),
            product_type: self.product_type,
            icon,
        }
    }
}

/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/admin/products
///
/// `icon` may be omitted, in which case the column stays empty.
pub async fn create_product(
    user: AuthUser,
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ProductForm = payload.validated()?;

    let icon = store_optional(&state.assets, payload.take_file("icon")).await?;
    let input = form.into_input(icon.clone().unwrap_or_default());

    let product = commit_with_asset(&state.assets, icon.as_deref(), async {
        ProductRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(
        id = product.id,
        price = product.price,
        user_id = user.user_id,
        "Product created",
    );
    Ok(response::created())
}

/// PUT /api/admin/products/{id}
pub async fn update_product(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: ProductForm = payload.validated()?;

    let existing = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Product", id))?;

    let fresh = store_optional(&state.assets, payload.take_file("icon")).await?;
    let input = form.into_input(fresh.clone().unwrap_or_else(|| existing.icon.clone()));

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        ProductRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Product", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.icon, fresh.as_deref()).await;

    tracing::info!(id, user_id = user.user_id, "Product updated");
    Ok(response::updated())
}

/// DELETE /api/admin/products/{id}
pub async fn delete_product(
    user: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Product", id))?;

    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found("Product", id));
    }
    state.assets.release(&existing.icon).await;

    tracing::info!(id, user_id = user.user_id, "Product deleted");
    Ok(response::deleted())
}
