//! Error envelope integration tests
//!
//! Failures raised by handlers must come out as envelopes, with internal
//! detail only when the server runs in debug mode.

use axum::http::StatusCode;
use axum::{middleware, routing::get, Router};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use sekolah_beta::backend::error::ApiError;
use sekolah_beta::backend::middleware::render_api_errors;
use sekolah_beta::backend::server::AppState;

use crate::common::{create_test_state, TestApp};

async fn failing_server(debug: bool) -> TestServer {
    let state: AppState = create_test_state(debug).await;
    let router = Router::new()
        .route(
            "/internal",
            get(|| async { Err::<(), _>(ApiError::internal("RuntimeException", "kaboom", None)) }),
        )
        .route(
            "/teapot",
            get(|| async { Err::<(), _>(ApiError::internal("HttpException", "short and stout", Some(418))) }),
        )
        .route(
            "/duplicate",
            get(|| async {
                Err::<(), _>(ApiError::database("UNIQUE constraint failed: users.email", None))
            }),
        )
        .route(
            "/missing-table",
            get(|| async { Err::<(), _>(ApiError::database("no such table: grades", None)) }),
        )
        .route(
            "/forbidden",
            get(|| async { Err::<(), _>(ApiError::forbidden(None)) }),
        )
        .layer(middleware::from_fn_with_state(state.clone(), render_api_errors))
        .with_state(state);

    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn test_health_probe() {
    let app = TestApp::new(false).await;

    let response = app.server.get("/up").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_api_route_is_envelope_404() {
    let app = TestApp::new(false).await;

    let response = app.server.get("/api/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    crate::assert_envelope!(body, error, "Data not found.");
}

#[tokio::test]
async fn test_generic_failure_hides_detail() {
    let server = failing_server(false).await;

    let response = server.get("/internal").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    crate::assert_envelope!(body, error, "An error occurred on the server.");
    assert_eq!(body["errors"], json!([]));
}

#[tokio::test]
async fn test_generic_failure_in_debug_mode() {
    let server = failing_server(true).await;

    let response = server.get("/internal").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    crate::assert_envelope!(body, error, "kaboom");
    assert_eq!(body["errors"]["exception"], "RuntimeException");
    assert_eq!(body["errors"]["message"], "kaboom");
    assert!(body["errors"]["file"].as_str().is_some_and(|f| f.ends_with(".rs")));
    assert!(body["errors"]["line"].is_u64());
}

#[tokio::test]
async fn test_failure_keeps_own_status_code() {
    let server = failing_server(false).await;

    let response = server.get("/teapot").await;

    assert_eq!(response.status_code(), StatusCode::IM_A_TEAPOT);
}

#[tokio::test]
async fn test_unclassified_database_error_is_classified_at_render_time() {
    let server = failing_server(false).await;

    let response = server.get("/duplicate").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    crate::assert_envelope!(body, error, "Data already exists (duplicate): email.");
    assert_eq!(body["errors"], json!([]));
}

#[tokio::test]
async fn test_database_error_detail_in_debug_mode() {
    let server = failing_server(true).await;

    let response = server.get("/duplicate").await;

    let body: Value = response.json();
    assert_eq!(
        body["errors"],
        json!({
            "detail": "email",
            "message": "UNIQUE constraint failed: users.email"
        })
    );
}

#[tokio::test]
async fn test_missing_table_message_depends_on_debug() {
    let quiet: Value = failing_server(false).await.get("/missing-table").await.json();
    assert_eq!(quiet["message"], "An error occurred on the server.");

    let response = failing_server(true).await.get("/missing-table").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let debug: Value = response.json();
    assert_eq!(debug["message"], "Database table not found: grades");
}

#[tokio::test]
async fn test_forbidden_shorthand() {
    let server = failing_server(false).await;

    let response = server.get("/forbidden").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    crate::assert_envelope!(body, error, "Access denied.");
}
