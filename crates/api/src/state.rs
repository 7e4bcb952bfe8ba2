use std::sync::Arc;

use codetech_core::assets::AssetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: codetech_db::DbPool,
    /// Server configuration (JWT settings are read by the auth gate and login).
    pub config: Arc<ServerConfig>,
    /// Uploaded image store backing every asset column.
    pub assets: AssetStore,
}
