pub mod health;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                                         list (GET), create (POST)
/// /recipes/search                                  search (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/recipes", recipes::router())
}
