//! Response Envelope
//!
//! The canonical JSON wrapper returned by every API endpoint (except the
//! raw current-user endpoint). Both the server and the client speak this
//! shape:
//!
//! ```json
//! {
//!   "status": "success",
//!   "success": true,
//!   "data": { ... },
//!   "message": "Request processed successfully.",
//!   "errors": { ... },
//!   "meta": { "pagination": { ... } }
//! }
//! ```
//!
//! `errors` and `meta` are omitted when absent. `status` and `success` always
//! agree with the HTTP status code the envelope was sent with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message used when a success response does not supply one.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request processed successfully.";

/// Message used when an error response does not supply one, and the only
/// message production clients see for internal failures.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred on the server.";

/// Outcome marker carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    /// Status matching an HTTP status code.
    pub fn from_code(code: u16) -> Self {
        if is_successful_status(code) {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Envelope wrapping every API payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// `"success"` for 2xx responses, `"error"` otherwise
    pub status: ResponseStatus,
    /// Boolean mirror of `status`
    pub success: bool,
    /// Payload, `null` when there is none
    #[serde(default)]
    pub data: Value,
    /// Human-readable message
    pub message: String,
    /// Error detail (field errors, debug detail, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    /// Extra metadata such as pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl Envelope {
    /// Build an envelope whose status fields follow `code`.
    pub fn new(code: u16, data: Value, message: impl Into<String>) -> Self {
        let status = ResponseStatus::from_code(code);
        Self {
            status,
            success: status.is_success(),
            data: sanitize(data),
            message: message.into(),
            errors: None,
            meta: None,
        }
    }

    /// Re-derive `status` and `success` from an HTTP status code.
    pub fn set_code(&mut self, code: u16) {
        self.status = ResponseStatus::from_code(code);
        self.success = self.status.is_success();
    }

    /// Mark the envelope as failed, attaching `errors` when given.
    pub fn mark_failed(&mut self, errors: Option<Value>) {
        if let Some(errors) = errors {
            self.errors = Some(errors);
        }
        self.status = ResponseStatus::Error;
        self.success = false;
    }

    /// Field errors as `field -> messages`, when `errors` has that shape.
    pub fn field_errors(&self) -> Option<crate::shared::error::FieldErrors> {
        self.errors
            .as_ref()
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
    }
}

/// Whether an HTTP status code counts as success (2xx).
pub fn is_successful_status(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Unwrap `{"data": X}` to `X` so payloads are never nested twice.
///
/// Only a mapping with `data` as its sole key is unwrapped; everything else
/// passes through unchanged.
pub fn sanitize(data: Value) -> Value {
    match data {
        Value::Object(mut map) if map.len() == 1 && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Pagination block placed under `meta.pagination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    /// 1-based index of the first item on the page, `null` for an empty page
    pub from: Option<u64>,
    /// 1-based index of the last item on the page, `null` for an empty page
    pub to: Option<u64>,
}

impl Pagination {
    /// Describe page `current_page` of a result set holding `total` rows.
    ///
    /// `per_page` of zero is treated as one.
    pub fn for_page(total: u64, per_page: u64, current_page: u64) -> Self {
        let per_page = per_page.max(1);
        let current_page = current_page.max(1);
        let last_page = total.div_ceil(per_page).max(1);
        let offset = (current_page - 1).saturating_mul(per_page);
        let on_page = total.saturating_sub(offset).min(per_page);

        let (from, to) = if on_page == 0 {
            (None, None)
        } else {
            (Some(offset + 1), Some(offset + on_page))
        };

        Self {
            total,
            per_page,
            current_page,
            last_page,
            from,
            to,
        }
    }
}
