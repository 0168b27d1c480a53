/**
 * Client Error Types
 */

use serde_json::Value;
use thiserror::Error;

use crate::shared::config::ConfigError;
use crate::shared::error::FieldErrors;

/// Message shown when neither the response nor the transport gives one
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// The envelope's `errors`, when present
        errors: Option<Value>,
    },

    /// A successful login response carried no access token
    #[error("Access token not found in response")]
    MissingToken,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Build a status error from a response body.
    ///
    /// The message is the envelope's `message`, or what an HTTP client
    /// reports for a bare failed status.
    pub fn from_response(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        let errors = body.get("errors").filter(|e| !e.is_null()).cloned();

        Self::Status {
            status,
            message,
            errors,
        }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message suitable for an error toast
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Raw `errors` payload of a failed response
    pub fn errors(&self) -> Option<&Value> {
        match self {
            Self::Status { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// `errors` as field messages, for inline form errors on a 422
    pub fn field_errors(&self) -> Option<FieldErrors> {
        self.errors()
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
    }

    pub fn is_validation(&self) -> bool {
        self.status() == Some(422)
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.status() == Some(401)
    }
}
