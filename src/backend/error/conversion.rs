/**
 * Error Conversion
 *
 * `From` implementations that turn library errors into [`ApiError`], and
 * the `IntoResponse` implementation that renders an error as an envelope.
 *
 * # Response Rendering
 *
 * `into_response` renders through the [`ResponseBuilder`] with debug
 * detail hidden and attaches the error itself to the response extensions.
 * The `render_api_errors` middleware re-renders it with debug detail when
 * the server runs in debug mode.
 */

use std::any::type_name;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use crate::backend::error::types::ApiError;
use crate::backend::response::ResponseBuilder;
use crate::shared::error::{FieldErrors, ValidationErrors};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = ResponseBuilder::new(false)
            .handle_exception(&self)
            .into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl From<sqlx::Error> for ApiError {
    /// Database errors convert unclassified; the response builder classifies
    /// them with the backend's adapter.
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::not_found(None),
            sqlx::Error::Database(db_err) => ApiError::database(db_err.message(), None),
            other => ApiError::internal(type_name::<sqlx::Error>(), other.to_string(), None),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    #[track_caller]
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::internal(type_name::<bcrypt::BcryptError>(), err.to_string(), None)
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    #[track_caller]
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::internal(
            type_name::<jsonwebtoken::errors::Error>(),
            err.to_string(),
            None,
        )
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(type_name::<serde_json::Error>(), err.to_string(), None)
    }
}

impl From<JsonRejection> for ApiError {
    /// Unreadable request bodies are reported against the `body` field
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let mut errors = FieldErrors::new();
        errors.insert("body".to_string(), vec![message.clone()]);
        ApiError::validation_with_message(message, errors)
    }
}

impl From<ValidationErrors> for ApiError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        ApiError::validation(errors)
    }
}
