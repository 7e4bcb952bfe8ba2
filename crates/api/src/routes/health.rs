use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Root-level liveness routes (NOT under `/api`).
///
/// ```text
/// GET /          -> root (connectivity message)
/// GET /health    -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
}
