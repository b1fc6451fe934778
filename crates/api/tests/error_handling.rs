mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog_api::error::AppError;
use catalog_core::error::CoreError;
use common::{body_json, build_test_app, get, post_json, FailingStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// AppError -> response mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_maps_to_400() {
    let response = AppError::Core(CoreError::Validation("bad title".into())).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "bad title");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let response = AppError::BadRequest("Expected JSON".into()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn store_failure_is_sanitized() {
    let response =
        AppError::Core(CoreError::StoreFailure("relation \"recipes\" does not exist".into()))
            .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let response = AppError::InternalError("secret detail".into()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Store failures through the router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_store_failure_returns_500() {
    let app = build_test_app(Arc::new(FailingStore));
    let response = get(app, "/api/recipes").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("password"));
}

#[tokio::test]
async fn search_store_failure_returns_500() {
    let app = build_test_app(Arc::new(FailingStore));
    let response = get(app, "/api/recipes/search?title=pie").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_store_failure_returns_500() {
    let app = build_test_app(Arc::new(FailingStore));
    let response = post_json(app, "/api/recipes", json!({"title": "Pie"})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn create_validates_before_touching_store() {
    let app = build_test_app(Arc::new(FailingStore));
    let response = post_json(app, "/api/recipes", json!({"title": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Recipe title is required.");
}
