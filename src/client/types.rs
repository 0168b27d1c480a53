/**
 * Client Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options controlling the notifications of a single request
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// Do not drive the loading indicator
    pub skip_loading: bool,
    /// Do not toast failures (401 handling is skipped too)
    pub skip_error_toast: bool,
    /// Do not toast success messages
    pub skip_success_toast: bool,
}

impl RequestOptions {
    pub fn quiet() -> Self {
        Self {
            skip_loading: true,
            skip_error_toast: true,
            skip_success_toast: true,
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Authenticated user as the API reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Access token from a login response, wrapped (`data.access_token`) or at
/// the top level (`access_token`)
pub fn extract_access_token(body: &Value) -> Option<&str> {
    body.pointer("/data/access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .or_else(|| body.get("access_token").and_then(Value::as_str))
        .filter(|t| !t.is_empty())
}

/// User payload from `/api/user`, wrapped in `data` or raw
pub fn unwrap_user(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("data").is_some_and(|d| !d.is_null()) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
