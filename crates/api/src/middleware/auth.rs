//! JWT bearer-token gate and the authenticated-user extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use codetech_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Subject of a verified bearer token.
///
/// [`require_auth`] stores it in the request extensions; handlers behind the
/// gate take it as an extractor parameter:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}

/// Reject requests without a valid `Authorization: Bearer <token>` header.
///
/// Every failure answers `401 Unauthorized` with the same body; the reason is
/// only logged.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(request.headers(), &state.config.jwt)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn authenticate(headers: &HeaderMap, jwt: &JwtConfig) -> Result<AuthUser, AppError> {
    let Some(header) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        tracing::debug!("Missing Authorization header");
        return Err(AppError::unauthorized());
    };

    let Some(token) = header.strip_prefix("Bearer ") else {
        tracing::debug!("Authorization header is not a bearer token");
        return Err(AppError::unauthorized());
    };

    let claims = validate_token(token.trim(), jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::unauthorized()
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;
    use codetech_core::error::CoreError;

    use super::*;
    use crate::auth::jwt::generate_access_token;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "middleware-test-secret".to_string(),
            expiry_mins: 60,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn valid_bearer_token_yields_subject() {
        let token = generate_access_token(12, &jwt()).unwrap();
        let user = authenticate(&headers_with(&format!("Bearer {token}")), &jwt()).unwrap();
        assert_eq!(user.user_id, 12);
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert_matches!(
            authenticate(&HeaderMap::new(), &jwt()),
            Err(AppError::Core(CoreError::Unauthorized(msg))) if msg == "Unauthorized"
        );
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let token = generate_access_token(12, &jwt()).unwrap();
        assert_matches!(
            authenticate(&headers_with(&format!("Token {token}")), &jwt()),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }

    #[test]
    fn tampered_token_is_unauthorized() {
        let mut token = generate_access_token(12, &jwt()).unwrap();
        token.push('x');
        assert_matches!(
            authenticate(&headers_with(&format!("Bearer {token}")), &jwt()),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }
}
