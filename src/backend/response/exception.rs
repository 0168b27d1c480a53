/**
 * Failure Handling
 *
 * [`ResponseBuilder::handle_exception`] logs a failure and renders it:
 *
 * 1. validation and credential failures become a 422 `validation_error`
 * 2. database failures are classified into a [`ConstraintViolation`] and
 *    rendered with a user-facing message; unrecognised ones fall through
 * 3. not-found / unauthorized / forbidden use their shorthands
 * 4. everything else gets generic handling
 *
 * In debug mode classified database failures carry `{detail, message}` with
 * the raw driver message and generic failures carry
 * `{exception, message, file, line}`. Outside debug mode both carry an
 * empty `errors` list and internal detail never reaches the client.
 */

use serde_json::{json, Value};

use super::builder::ResponseBuilder;
use super::ApiResponse;
use crate::backend::database::ConstraintViolation;
use crate::backend::error::{ApiError, ApiErrorKind};
use crate::shared::envelope::DEFAULT_ERROR_MESSAGE;

impl ResponseBuilder {
    /// Log `error` and render it as an envelope.
    pub fn handle_exception(&mut self, error: &ApiError) -> ApiResponse {
        tracing::error!(
            exception = error.exception_name(),
            file = error.file(),
            line = error.line(),
            "API Exception: {}",
            error.message()
        );
        self.render_exception(error)
    }

    /// Render `error` without logging it.
    pub fn render_exception(&mut self, error: &ApiError) -> ApiResponse {
        match error.kind() {
            ApiErrorKind::Validation { message, errors }
            | ApiErrorKind::Authentication { message, errors } => {
                let errors = serde_json::to_value(errors).unwrap_or_default();
                self.validation_error(errors, Some(message.as_str()))
            }
            ApiErrorKind::Database { message, violation } => {
                let violation = violation.clone().or_else(|| {
                    self.adapter
                        .as_ref()
                        .and_then(|adapter| adapter.classify(message))
                });
                match violation {
                    Some(violation) => self.constraint_violation(&violation, message),
                    None => self.generic_exception(error),
                }
            }
            ApiErrorKind::NotFound { message } => self.not_found(Some(message.as_str())),
            ApiErrorKind::Unauthorized { message } => self.unauthorized(Some(message.as_str())),
            ApiErrorKind::Forbidden { message } => self.forbidden(Some(message.as_str())),
            ApiErrorKind::Internal { .. } => self.generic_exception(error),
        }
    }

    fn generic_exception(&mut self, error: &ApiError) -> ApiResponse {
        let status = error.status_code().as_u16();
        if self.debug {
            let detail = json!({
                "exception": error.exception_name(),
                "message": error.message(),
                "file": error.file(),
                "line": error.line(),
            });
            let message = error.message();
            self.error(Some(message.as_str()), status, Some(detail))
        } else {
            self.error(Some(DEFAULT_ERROR_MESSAGE), status, Some(json!([])))
        }
    }

    fn constraint_violation(&mut self, violation: &ConstraintViolation, raw: &str) -> ApiResponse {
        let debug = self.debug;
        let detail = |detail: String| -> Value {
            if debug {
                json!({ "detail": detail, "message": raw })
            } else {
                json!([])
            }
        };

        let (message, errors) = match violation {
            ConstraintViolation::DuplicateEntry { key } => (
                format!("Data already exists (duplicate): {}.", key),
                detail(key.clone()),
            ),
            ConstraintViolation::UnknownColumn { column, table } => (
                internal_message(debug, format!("Database column not found: {}", column)),
                detail(format!(
                    "Column '{}' has not been added to table '{}'.",
                    column, table
                )),
            ),
            ConstraintViolation::UnknownTable { table } => (
                internal_message(debug, format!("Database table not found: {}", table)),
                detail(format!(
                    "Table '{}' has not been created or is not available in the database.",
                    table
                )),
            ),
            // This variant reports the raw driver text as `detail`
            ConstraintViolation::MissingDefaultValue { field } => (
                format!("Column '{}' is required.", field),
                if debug {
                    json!({
                        "message": format!(
                            "Column '{}' cannot be empty and has no default value in the database.",
                            field
                        ),
                        "detail": raw,
                    })
                } else {
                    json!([])
                },
            ),
            ConstraintViolation::InvalidDateValue { value, column } => (
                format!("Invalid date format for column '{}'.", column),
                detail(format!(
                    "Value '{}' does not match the 'YYYY-MM-DD' format.",
                    value
                )),
            ),
            ConstraintViolation::NotNull { column } => (
                format!("Column '{}' cannot be empty.", column),
                detail(format!("Column '{}' is required (NOT NULL).", column)),
            ),
        };

        self.error(Some(message.as_str()), violation.status_code(), Some(errors))
    }
}

fn internal_message(debug: bool, message: String) -> String {
    if debug {
        message
    } else {
        DEFAULT_ERROR_MESSAGE.to_string()
    }
}
