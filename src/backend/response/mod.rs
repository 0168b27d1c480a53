//! Response Module
//!
//! Builds the JSON envelope every API endpoint answers with.
//!
//! - **`builder`** - [`ResponseBuilder`], the fluent accumulator and its
//!   shorthands (`success`, `error`, `not_found`, ...)
//! - **`exception`** - `handle_exception`: failure logging and dispatch,
//!   including database-error classification
//!
//! Handlers return `Result<ApiResponse, ApiError>`; both sides end up as an
//! [`Envelope`] serialized with the matching HTTP status.

pub mod builder;
pub mod exception;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::shared::Envelope;

pub use builder::ResponseBuilder;

/// A finished envelope and the status it is sent with
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    envelope: Envelope,
}

impl ApiResponse {
    pub fn new(status: StatusCode, envelope: Envelope) -> Self {
        Self { status, envelope }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
