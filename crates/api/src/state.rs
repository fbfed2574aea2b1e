use std::sync::Arc;

use cubekit_catalog::CardCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cubekit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Card catalog client (search, lookups, localized overlay).
    pub catalog: Arc<CardCatalog>,
}
