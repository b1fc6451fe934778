//! Route definitions for the recipe catalog.
//!
//! All routes are mounted under `/recipes`.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Recipe routes mounted at `/recipes`.
///
/// ```text
/// GET    /          -> list_recipes
/// POST   /          -> create_recipe
/// GET    /search    -> search_recipes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes).post(recipes::create_recipe))
        .route("/search", get(recipes::search_recipes))
}
