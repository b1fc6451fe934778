#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_core::error::CoreError;
use catalog_core::filter::RecipeFilter;
use catalog_core::recipe::{NewRecipe, Nutrients};
use catalog_db::memory::MemoryRecipeStore;
use catalog_db::models::recipe::Recipe;
use catalog_db::store::{RecipePage, RecipeStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        default_page_limit: 10,
        max_page_limit: 100,
        static_dir: None,
    }
}

/// Build the full application router around the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn RecipeStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A recipe with the fields the search filters look at.
pub fn recipe(
    title: &str,
    cuisine: &str,
    rating: Option<f64>,
    total_time: Option<i32>,
    calories: &str,
) -> NewRecipe {
    let mut nutrients = Nutrients::new();
    nutrients.insert("calories".to_string(), calories.to_string());
    NewRecipe {
        cuisine: Some(cuisine.to_string()),
        rating,
        total_time,
        nutrients: Some(nutrients),
        ..NewRecipe::titled(title)
    }
}

/// In-memory store seeded with a small, varied catalog.
pub async fn seeded_store() -> Arc<MemoryRecipeStore> {
    let store = Arc::new(MemoryRecipeStore::new());
    for r in [
        recipe("Sweet Potato Pie", "Southern Recipes", Some(4.8), Some(115), "389 kcal"),
        recipe("Quick Thai Salad", "Thai", Some(4.6), Some(10), "120 kcal"),
        recipe("Slow Beef Stew", "Irish", None, Some(240), "1389 kcal"),
        recipe("Buttered Toast", "British", Some(3.0), Some(5), "90 kcal"),
        recipe("Pecan Pie", "Southern Recipes", Some(4.5), Some(30), "450 kcal"),
    ] {
        store.create(&r).await.unwrap();
    }
    store
}

/// Store whose every call fails, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl RecipeStore for FailingStore {
    async fn count_and_page(&self, _: i64, _: i64) -> Result<RecipePage, CoreError> {
        Err(CoreError::StoreFailure("password authentication failed".into()))
    }

    async fn find_all(&self, _: &RecipeFilter) -> Result<Vec<Recipe>, CoreError> {
        Err(CoreError::StoreFailure("password authentication failed".into()))
    }

    async fn create(&self, _: &NewRecipe) -> Result<Recipe, CoreError> {
        Err(CoreError::StoreFailure("password authentication failed".into()))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Err(CoreError::StoreFailure("password authentication failed".into()))
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// Send a POST request with a raw `application/json` body.
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Titles in a `data` array, in response order.
pub fn titles(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data must be an array")
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}
