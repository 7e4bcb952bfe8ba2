//! Handler for `POST /api/login`.

use axum::extract::State;
use axum::Json;
use codetech_core::error::CoreError;
use codetech_db::repositories::UserRepo;
use serde::Serialize;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::credentials_match;
use crate::error::{AppError, AppResult};
use crate::form::{FormPayload, FromPayload};
use crate::state::AppState;

/// Shared by every credential failure so callers cannot tell which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl FromPayload for LoginForm {
    fn from_payload(payload: &FormPayload) -> AppResult<Self> {
        Ok(Self {
            email: payload.text("email"),
            password: payload.text("password"),
        })
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

/// POST /api/login
///
/// Exchange email + password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    payload: FormPayload,
) -> AppResult<Json<LoginResponse>> {
    let form: LoginForm = payload.validated()?;

    let user = UserRepo::find_by_email(&state.pool, &form.email).await?;

    // Unknown emails still pay for a bcrypt verification.
    let verified = credentials_match(&form.password, user.as_ref().map(|u| u.password.as_str()));
    let user = user.filter(|_| verified).ok_or_else(|| {
        tracing::debug!("Login rejected");
        invalid_credentials()
    })?;

    let token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        message: "Login successfully",
        token,
        expires_in: state.config.jwt.expiry_secs(),
    }))
}
