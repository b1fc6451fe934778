use std::sync::Arc;

use catalog_db::store::RecipeStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store the query engine runs against.
    pub store: Arc<dyn RecipeStore>,
    /// Server configuration (page size defaults are read per request).
    pub config: Arc<ServerConfig>,
}
