//! Handlers for the recipe catalog.
//!
//! Listing and search both answer with a [`Listing`] envelope; clients
//! distinguish them by the presence of `total`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::filter::SearchCriteria;
use catalog_core::listing::Listing;
use catalog_core::pagination::PageRequest;
use catalog_core::recipe::{NewRecipe, RecipeInput};
use catalog_db::models::recipe::Recipe;

use crate::engine::catalog::{execute, CatalogQuery};
use crate::error::{AppError, AppResult};
use crate::query::ListingParams;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// GET /api/recipes
///
/// Paginated listing ordered by rating. Returns `{page, limit, total, data}`.
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Listing<Recipe>>> {
    let params = ListingParams::from_pairs(pairs);
    let page = PageRequest::from_raw(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.config.default_page_limit,
        state.config.max_page_limit,
    );

    let listing = execute(state.store.as_ref(), &CatalogQuery::Listing(page)).await?;
    Ok(Json(listing))
}

/// GET /api/recipes/search
///
/// Multi-criteria search. Returns `{data}` with every match, unpaginated.
/// Malformed range parameters are ignored rather than rejected, and a
/// repeated parameter keeps its first value.
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Listing<Recipe>>> {
    let criteria = SearchCriteria::from_pairs(pairs);
    let listing = execute(state.store.as_ref(), &CatalogQuery::search(&criteria)).await?;
    Ok(Json(listing))
}

/// POST /api/recipes
///
/// Create a single recipe. Numeric fields are normalized (`"NaN"` and other
/// non-numeric values become null); a missing title is rejected with 400.
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let new_recipe = NewRecipe::try_from(input)?;

    let recipe = state.store.create(&new_recipe).await?;

    tracing::info!(recipe_id = recipe.id, title = %recipe.title, "Recipe created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Recipe created successfully!",
            data: recipe,
        }),
    ))
}
