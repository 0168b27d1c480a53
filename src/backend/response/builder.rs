/**
 * Response Builder
 *
 * Fluent accumulator for [`Envelope`] responses. A cycle starts with
 * [`ResponseBuilder::api_response`], optionally adjusts message, status,
 * errors and meta, and ends with [`ResponseBuilder::send`]. State is reset
 * at both ends of the cycle, so one builder can serve any number of
 * responses without leaking message, meta or status between them.
 *
 * # Example
 *
 * ```rust,no_run
 * use sekolah_beta::backend::response::ResponseBuilder;
 * use sekolah_beta::shared::Pagination;
 * use serde_json::json;
 *
 * let mut builder = ResponseBuilder::new(false);
 * let response = builder
 *     .api_response(json!([{ "id": 1 }]))
 *     .add_pagination_meta(Pagination::for_page(1, 15, 1))
 *     .send();
 * assert_eq!(response.status().as_u16(), 200);
 * ```
 *
 * The shorthands (`success`, `error`, `not_found`, `validation_error`,
 * `unauthorized`, `forbidden`) run a whole cycle in one call.
 */

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Map, Value};

use super::ApiResponse;
use crate::backend::database::DbErrorAdapter;
use crate::backend::error::types::{
    FORBIDDEN_MESSAGE, NOT_FOUND_MESSAGE, UNAUTHORIZED_MESSAGE, VALIDATION_MESSAGE,
};
use crate::shared::envelope::{
    is_successful_status, Envelope, Pagination, DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};

const DEFAULT_STATUS: u16 = 200;

/// Per-request envelope builder
#[derive(Debug)]
pub struct ResponseBuilder {
    /// Expose internal failure detail in error responses
    pub(super) debug: bool,
    /// Classifies database failures that arrive unclassified
    pub(super) adapter: Option<Arc<dyn DbErrorAdapter>>,
    response: Option<Envelope>,
    status_code: u16,
    meta: Map<String, Value>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ResponseBuilder {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            adapter: None,
            response: None,
            status_code: DEFAULT_STATUS,
            meta: Map::new(),
        }
    }

    /// Attach the database error adapter used by `handle_exception`
    pub fn with_adapter(mut self, adapter: Arc<dyn DbErrorAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Start a new cycle with `data` as payload.
    ///
    /// A mapping payload may carry `statusCode` and `message` keys; they are
    /// removed from the payload and used as the status code and message.
    pub fn api_response(&mut self, data: Value) -> &mut Self {
        self.reset();

        let mut data = data;
        let mut message = None;
        if let Value::Object(map) = &mut data {
            if let Some(code) = map
                .remove("statusCode")
                .and_then(|code| code.as_u64())
                .and_then(|code| u16::try_from(code).ok())
            {
                self.status_code = code;
            }
            if let Some(Value::String(text)) = map.remove("message") {
                message = Some(text);
            }
        }

        let message = message.unwrap_or_else(|| self.default_message().to_string());
        self.response = Some(Envelope::new(self.status_code, data, message));
        self
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.envelope_mut().message = message.into();
        self
    }

    /// Set the HTTP status code; `status` and `success` follow it.
    pub fn set_status_code(&mut self, code: u16) -> &mut Self {
        self.status_code = code;
        self.envelope_mut().set_code(code);
        self
    }

    /// Mark the response as failed, attaching `errors` when given.
    pub fn with_errors(&mut self, errors: Option<Value>) -> &mut Self {
        self.envelope_mut().mark_failed(errors);
        self
    }

    /// Merge entries into `meta`; later keys overwrite earlier ones.
    pub fn add_meta(&mut self, meta: Map<String, Value>) -> &mut Self {
        self.meta.extend(meta);
        self
    }

    pub fn add_pagination_meta(&mut self, pagination: Pagination) -> &mut Self {
        let mut meta = Map::new();
        meta.insert(
            "pagination".to_string(),
            serde_json::to_value(pagination).unwrap_or_default(),
        );
        self.add_meta(meta)
    }

    /// Finish the cycle: attach meta, produce the response and reset.
    pub fn send(&mut self) -> ApiResponse {
        let mut envelope = match self.response.take() {
            Some(envelope) => envelope,
            None => self.blank_envelope(),
        };
        if !self.meta.is_empty() {
            envelope.meta = Some(std::mem::take(&mut self.meta));
        }
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.reset();
        ApiResponse::new(status, envelope)
    }

    pub fn success(&mut self, data: Value, message: Option<&str>, code: u16) -> ApiResponse {
        self.api_response(data)
            .set_message(message.unwrap_or(DEFAULT_SUCCESS_MESSAGE))
            .set_status_code(code)
            .send()
    }

    /// Error response; always `success: false` whatever the code.
    pub fn error(&mut self, message: Option<&str>, code: u16, errors: Option<Value>) -> ApiResponse {
        self.api_response(Value::Null)
            .set_message(message.unwrap_or(DEFAULT_ERROR_MESSAGE))
            .set_status_code(code)
            .with_errors(errors)
            .send()
    }

    pub fn not_found(&mut self, message: Option<&str>) -> ApiResponse {
        self.error(Some(message.unwrap_or(NOT_FOUND_MESSAGE)), 404, None)
    }

    pub fn validation_error(&mut self, errors: Value, message: Option<&str>) -> ApiResponse {
        self.error(Some(message.unwrap_or(VALIDATION_MESSAGE)), 422, Some(errors))
    }

    pub fn unauthorized(&mut self, message: Option<&str>) -> ApiResponse {
        self.error(Some(message.unwrap_or(UNAUTHORIZED_MESSAGE)), 401, None)
    }

    pub fn forbidden(&mut self, message: Option<&str>) -> ApiResponse {
        self.error(Some(message.unwrap_or(FORBIDDEN_MESSAGE)), 403, None)
    }

    fn reset(&mut self) {
        self.response = None;
        self.status_code = DEFAULT_STATUS;
        self.meta.clear();
    }

    fn default_message(&self) -> &'static str {
        if is_successful_status(self.status_code) {
            DEFAULT_SUCCESS_MESSAGE
        } else {
            DEFAULT_ERROR_MESSAGE
        }
    }

    fn blank_envelope(&self) -> Envelope {
        Envelope::new(self.status_code, Value::Null, self.default_message())
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        let (code, message) = (self.status_code, self.default_message());
        self.response
            .get_or_insert_with(|| Envelope::new(code, Value::Null, message))
    }
}
