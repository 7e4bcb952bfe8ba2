pub mod admin;
pub mod health;
pub mod public;

use axum::middleware;
use axum::Router;

use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /login, /create-user                 public writes
/// /{entity}                            public reads
/// /articles/{slug}/views               public view counter
/// /admin/...                           bearer token required
/// ```
///
/// The auth gate is a `route_layer`, so unknown paths under `/admin` still
/// answer 404 rather than 401.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().merge(public::router()).nest(
        "/admin",
        admin::router().route_layer(middleware::from_fn_with_state(state, require_auth)),
    )
}
