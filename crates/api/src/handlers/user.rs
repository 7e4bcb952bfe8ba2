//! Handlers for the `/users` resource.
//!
//! Users double as article authors and as the public team listing. Password
//! hashes never leave the database layer; every response uses
//! [`UserResponse`](codetech_db::models::user::UserResponse).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use codetech_core::error::CoreError;
use codetech_core::roles::STAFF_ROLES;
use codetech_db::models::user::{CreateUser, UpdateUser};
use codetech_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::form::{FormPayload, FromPayload};
use crate::handlers::{
    commit_with_asset, not_found, release_superseded, store_optional, store_required, IdPath,
};
use crate::middleware::auth::AuthUser;
use crate::response::{self, DataResponse};
use crate::state::AppState;

const EMAIL_TAKEN: &str = "Email already exists";

#[derive(Debug, Validate)]
pub struct CreateUserForm {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

impl FromPayload for CreateUserForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            name: payload.text("name"),
            email: payload.text("email"),
            password: payload.text("password"),
            role: payload.text("role"),
        })
    }
}

/// Update form: `password` is optional and only re-hashed when sent.
#[derive(Debug, Validate)]
pub struct UpdateUserForm {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

impl FromPayload for UpdateUserForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            name: payload.text("name"),
            email: payload.text("email"),
            password: payload.optional_text("password"),
            role: payload.text("role"),
        })
    }
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}

/// GET /api/admin/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/users
///
/// Public team listing: every user except admin and superadmin accounts.
pub async fn list_public_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_excluding_roles(&state.pool, STAFF_ROLES).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/admin/users/me
///
/// Profile of the token's subject.
pub async fn get_me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let me = UserRepo::find_response_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| not_found("User", user.user_id))?;
    Ok(Json(DataResponse { data: me }))
}

/// POST /api/admin/users and POST /api/create-user
///
/// Multipart with a required `profile` image. Duplicate emails are `409`.
pub async fn create_user(
    State(state): State<AppState>,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: CreateUserForm = payload.validated()?;

    if UserRepo::email_taken(&state.pool, &form.email, None).await? {
        return Err(AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into())));
    }

    let password_hash = hash(&form.password)?;
    let profile = store_required(&state.assets, payload.take_file("profile"), "Profile").await?;
    let input = CreateUser {
        name: form.name,
        email: form.email,
        password_hash,
        profile,
        role: form.role,
    };

    let user = commit_with_asset(&state.assets, Some(&input.profile), async {
        UserRepo::create(&state.pool, &input).await.map_err(AppError::from)
    })
    .await?;

    tracing::info!(id = user.id, role = %user.role, "User created");
    Ok(response::created())
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    mut payload: FormPayload,
) -> AppResult<impl IntoResponse> {
    let form: UpdateUserForm = payload.validated()?;

    let existing = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("User", id))?;

    if UserRepo::email_taken(&state.pool, &form.email, Some(id)).await? {
        return Err(AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into())));
    }

    let password_hash = form.password.as_deref().map(hash).transpose()?;
    let fresh = store_optional(&state.assets, payload.take_file("profile")).await?;
    let input = UpdateUser {
        name: form.name,
        email: form.email,
        profile: fresh.clone().unwrap_or_else(|| existing.profile.clone()),
        role: form.role,
        password_hash,
    };

    commit_with_asset(&state.assets, fresh.as_deref(), async {
        UserRepo::update(&state.pool, id, &input)
            .await?
            .ok_or_else(|| not_found("User", id))
    })
    .await?;
    release_superseded(&state.assets, &existing.profile, fresh.as_deref()).await;

    tracing::info!(
        id,
        password_changed = input.password_hash.is_some(),
        user_id = auth.user_id,
        "User updated",
    );
    Ok(response::updated())
}

/// DELETE /api/admin/users/{id}
///
/// `409` while the user still authors articles.
pub async fn delete_user(
    auth: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let existing = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("User", id))?;

    if !UserRepo::delete(&state.pool, id).await? {
        return Err(not_found("User", id));
    }
    state.assets.release(&existing.profile).await;

    tracing::info!(id, user_id = auth.user_id, "User deleted");
    Ok(response::deleted())
}
