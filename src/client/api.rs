/**
 * API Client
 *
 * HTTP client for the Sekolah Beta API. Every request:
 *
 * 1. carries the stored bearer token and `Accept: application/json`
 * 2. drives the loading indicator unless `skip_loading`
 * 3. toasts a success envelope's message unless `skip_success_toast`
 * 4. on failure, unless `skip_error_toast`:
 *    - 422 with `errors`: "Validation Error" toast
 *    - 401: "Session Expired" toast, token cleared, redirect to login
 *    - otherwise: "Error" toast with the server or transport message
 */

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde_json::Value;

use super::error::ClientError;
use super::notify::{Notifier, Toast, TracingNotifier};
use super::storage::{MemoryTokenStorage, TokenStorage};
use super::types::{extract_access_token, unwrap_user, Credentials, RequestOptions, UserProfile};
use crate::shared::config::AppConfig;

/// Where the client sends the user after a 401 or logout
pub const LOGIN_PATH: &str = "/login";

/// Where the client sends the user after logging in
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: AppConfig,
    tokens: Arc<dyn TokenStorage>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Client with in-memory token storage that logs notifications
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config,
            tokens: Arc::new(MemoryTokenStorage::new()),
            notifier: Arc::new(TracingNotifier),
        })
    }

    pub fn with_token_storage(mut self, tokens: Arc<dyn TokenStorage>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Send a request and return the parsed response body.
    ///
    /// Bodies that are not JSON come back as a JSON string; empty bodies as
    /// `null`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<Value, ClientError> {
        let mut request = self
            .http
            .request(method, self.config.api_url(path))
            .header(ACCEPT, "application/json");
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        if !options.skip_loading {
            self.notifier.start_loading();
        }
        let result = Self::execute(request).await;
        if !options.skip_loading {
            self.notifier.finish_loading();
        }

        match result {
            Ok(body) => {
                self.on_success(&body, options);
                Ok(body)
            }
            Err(err) => {
                self.on_error(&err, options);
                Err(err)
            }
        }
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.send(Method::GET, path, None, options).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<Value, ClientError> {
        self.send(Method::POST, path, body, options).await
    }

    async fn execute(request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::from_response(status.as_u16(), &body))
        }
    }

    fn on_success(&self, body: &Value, options: RequestOptions) {
        if options.skip_success_toast || body.get("status").and_then(Value::as_str) != Some("success") {
            return;
        }
        if let Some(message) = body.get("message").and_then(Value::as_str).filter(|m| !m.is_empty()) {
            self.notifier.toast(Toast::success(message));
        }
    }

    fn on_error(&self, err: &ClientError, options: RequestOptions) {
        if options.skip_error_toast {
            return;
        }

        let message = err.display_message();
        match err.status() {
            Some(422) if err.errors().is_some() => self.notifier.toast(Toast::validation(message)),
            Some(401) => {
                self.notifier.toast(Toast::session_expired());
                self.tokens.clear();
                self.notifier.redirect(LOGIN_PATH);
            }
            _ => self.notifier.toast(Toast::error(message)),
        }
    }

    /// Log in, store the token and load the user.
    ///
    /// A 422 comes back as [`ClientError::Status`]; its
    /// [`field_errors`](ClientError::field_errors) are meant for inline form
    /// errors.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError> {
        let body = serde_json::to_value(credentials)?;
        let response = self
            .post("/api/login", Some(&body), RequestOptions::default())
            .await?;

        let token = extract_access_token(&response).ok_or_else(|| {
            tracing::error!("Token extraction failed. Response: {}", response);
            ClientError::MissingToken
        })?;
        self.tokens.set(token);

        let user = self.fetch_user().await?;
        self.notifier.redirect(DASHBOARD_PATH);
        Ok(user)
    }

    /// Current user, accepting both wrapped and raw responses
    pub async fn fetch_user(&self) -> Result<UserProfile, ClientError> {
        let body = self.get("/api/user", RequestOptions::default()).await?;
        Ok(serde_json::from_value(unwrap_user(body))?)
    }

    /// Log out. Local state is cleared even when the request fails.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.post("/api/logout", None, RequestOptions::default()).await;

        self.tokens.clear();
        self.notifier.redirect(LOGIN_PATH);

        result.map(|_| ())
    }
}
