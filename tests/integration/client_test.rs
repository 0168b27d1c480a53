//! API client tests against a mock server
//!
//! The mock server plays the API; a recording notifier captures the
//! loading indicator, toasts and redirects.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sekolah_beta::client::{
    ApiClient, ClientError, Credentials, MemoryTokenStorage, RequestOptions, Toast, TokenStorage,
    DASHBOARD_PATH, LOGIN_PATH,
};
use sekolah_beta::shared::AppConfig;

use crate::common::{RecordingNotifier, UiEvent};

struct Harness {
    server: MockServer,
    client: ApiClient,
    notifier: Arc<RecordingNotifier>,
    tokens: Arc<MemoryTokenStorage>,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let config = AppConfig::builder().server_url(server.uri()).build().unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let tokens = Arc::new(MemoryTokenStorage::new());
    let client = ApiClient::new(config)
        .unwrap()
        .with_notifier(notifier.clone())
        .with_token_storage(tokens.clone());

    Harness {
        server,
        client,
        notifier,
        tokens,
    }
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Administrator",
        "email": "admin@sekolahbeta.com",
        "email_verified_at": "2025-01-01T00:00:00Z",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_login_stores_wrapped_token_and_fetches_raw_user() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "success": true,
            "data": { "access_token": "tok-1", "token_type": "Bearer", "user": user_json() },
            "message": "Authenticated successfully."
        })))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&h.server)
        .await;

    let user = h
        .client
        .login(&Credentials::new("admin@sekolahbeta.com", "password"))
        .await
        .unwrap();

    assert_eq!(user.name, "Administrator");
    assert_eq!(h.tokens.get().as_deref(), Some("tok-1"));
    assert!(h.client.is_logged_in());
    assert_eq!(h.notifier.toasts(), vec![Toast::success("Authenticated successfully.")]);
    assert_eq!(h.notifier.redirects(), vec![DASHBOARD_PATH.to_string()]);
}

#[tokio::test]
async fn test_login_accepts_top_level_token_and_wrapped_user() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok-2" })))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json() })))
        .mount(&h.server)
        .await;

    let user = h
        .client
        .login(&Credentials::new("admin@sekolahbeta.com", "password"))
        .await
        .unwrap();

    assert_eq!(user.email, "admin@sekolahbeta.com");
    assert_eq!(h.tokens.get().as_deref(), Some("tok-2"));
    assert!(h.notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_login_without_token_fails() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&h.server)
        .await;

    let err = h
        .client
        .login(&Credentials::new("admin@sekolahbeta.com", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MissingToken));
    assert!(h.tokens.get().is_none());
}

#[tokio::test]
async fn test_validation_failure_toasts_and_exposes_field_errors() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": "error",
            "success": false,
            "data": null,
            "message": "The provided credentials do not match our records.",
            "errors": { "email": ["The provided credentials do not match our records."] }
        })))
        .mount(&h.server)
        .await;

    let err = h
        .client
        .login(&Credentials::new("admin@sekolahbeta.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.field_errors().unwrap()["email"],
        vec!["The provided credentials do not match our records.".to_string()]
    );
    assert_eq!(
        h.notifier.toasts(),
        vec![Toast::validation("The provided credentials do not match our records.")]
    );
    assert!(h.tokens.get().is_none());
}

#[tokio::test]
async fn test_unauthenticated_clears_token_and_redirects() {
    let h = harness().await;
    h.tokens.set("expired");
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "error",
            "success": false,
            "data": null,
            "message": "Unauthenticated."
        })))
        .mount(&h.server)
        .await;

    let err = h.client.fetch_user().await.unwrap_err();

    assert!(err.is_unauthenticated());
    assert!(h.tokens.get().is_none());
    assert_eq!(h.notifier.toasts(), vec![Toast::session_expired()]);
    assert_eq!(h.notifier.redirects(), vec![LOGIN_PATH.to_string()]);
}

#[tokio::test]
async fn test_server_error_without_message() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&h.server)
        .await;

    let err = h.client.fetch_user().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        h.notifier.toasts(),
        vec![Toast::error("Request failed with status code 500")]
    );
}

#[tokio::test]
async fn test_loading_indicator_wraps_request() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&h.server)
        .await;

    h.client.fetch_user().await.unwrap();

    assert_eq!(
        h.notifier.events(),
        vec![UiEvent::LoadingStarted, UiEvent::LoadingFinished]
    );
}

#[tokio::test]
async fn test_quiet_request_emits_nothing() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })))
        .mount(&h.server)
        .await;
    h.tokens.set("kept");

    let result = h
        .client
        .post("/api/logout", None, RequestOptions::quiet())
        .await;

    assert!(result.is_err());
    assert!(h.notifier.events().is_empty());
    assert_eq!(h.tokens.get().as_deref(), Some("kept"));
}

#[tokio::test]
async fn test_logout_clears_state_even_on_failure() {
    let h = harness().await;
    h.tokens.set("tok-3");
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .and(header("authorization", "Bearer tok-3"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "error",
            "success": false,
            "data": null,
            "message": "An error occurred on the server.",
            "errors": []
        })))
        .mount(&h.server)
        .await;

    let result = h.client.logout().await;

    assert!(result.is_err());
    assert!(h.tokens.get().is_none());
    assert_eq!(h.notifier.toasts(), vec![Toast::error("An error occurred on the server.")]);
    assert_eq!(h.notifier.redirects(), vec![LOGIN_PATH.to_string()]);
}

#[tokio::test]
async fn test_logout_success_toast() {
    let h = harness().await;
    h.tokens.set("tok-4");
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "success": true,
            "data": null,
            "message": "Logged out successfully."
        })))
        .mount(&h.server)
        .await;

    h.client.logout().await.unwrap();

    assert_eq!(h.notifier.toasts(), vec![Toast::success("Logged out successfully.")]);
    assert!(!h.client.is_logged_in());
}
