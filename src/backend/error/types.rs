/**
 * Backend Error Types
 *
 * Every failure a handler can produce is an [`ApiError`]: a tagged
 * [`ApiErrorKind`] plus the source location where it was raised. The
 * response builder dispatches on the kind to pick the envelope shape.
 *
 * # Error Categories
 *
 * - `Validation` - request data failed field validation (422)
 * - `Authentication` - credentials did not match an account (422)
 * - `Database` - the database rejected a statement; classified into a
 *   [`ConstraintViolation`] when the driver message is recognised
 * - `NotFound` / `Unauthorized` / `Forbidden` - shorthand failures
 * - `Internal` - anything else, carrying an optional numeric code
 *
 * # Location Tracking
 *
 * Constructors are `#[track_caller]`, so the recorded file and line point
 * at the code that raised the error rather than at this module.
 */

use std::panic::Location;

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::database::ConstraintViolation;
use crate::shared::error::{FieldErrors, ValidationErrors};

/// Default message for not-found failures
pub const NOT_FOUND_MESSAGE: &str = "Data not found.";
/// Default message for validation failures
pub const VALIDATION_MESSAGE: &str = "Validation failed.";
/// Default message for unauthorized failures
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized.";
/// Default message for forbidden failures
pub const FORBIDDEN_MESSAGE: &str = "Access denied.";
/// Message for requests without a usable bearer token
pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";
/// Message for a failed credential check
pub const INVALID_CREDENTIALS_MESSAGE: &str = "The provided credentials do not match our records.";

/// The kind of failure, with the data needed to render it
#[derive(Debug, Clone, Error)]
pub enum ApiErrorKind {
    /// Field validation failure
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    /// Credentials did not match any account
    #[error("{message}")]
    Authentication {
        message: String,
        errors: FieldErrors,
    },

    /// Database rejected a statement
    #[error("{message}")]
    Database {
        /// Raw driver message
        message: String,
        /// Classification, when already known
        violation: Option<ConstraintViolation>,
    },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    /// Any other failure
    #[error("{message}")]
    Internal {
        /// Name of the underlying error type
        exception: &'static str,
        message: String,
        /// Numeric code carried by the failure, used as HTTP status when in range
        code: Option<i64>,
    },
}

/// A handler failure with the location it was raised at
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ApiError {
    kind: ApiErrorKind,
    location: &'static Location<'static>,
}

impl ApiError {
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// Validation failure whose message summarises the field errors
    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        let message = errors.summary();
        Self::new(ApiErrorKind::Validation {
            message,
            errors: errors.into_map(),
        })
    }

    /// Validation failure with an explicit message
    #[track_caller]
    pub fn validation_with_message(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self::new(ApiErrorKind::Validation {
            message: message.into(),
            errors,
        })
    }

    /// Credentials did not match, reported against the `email` field
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(
            "email".to_string(),
            vec![INVALID_CREDENTIALS_MESSAGE.to_string()],
        );
        Self::new(ApiErrorKind::Authentication {
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            errors,
        })
    }

    #[track_caller]
    pub fn database(message: impl Into<String>, violation: Option<ConstraintViolation>) -> Self {
        Self::new(ApiErrorKind::Database {
            message: message.into(),
            violation,
        })
    }

    #[track_caller]
    pub fn not_found(message: Option<&str>) -> Self {
        Self::new(ApiErrorKind::NotFound {
            message: message.unwrap_or(NOT_FOUND_MESSAGE).to_string(),
        })
    }

    #[track_caller]
    pub fn unauthorized(message: Option<&str>) -> Self {
        Self::new(ApiErrorKind::Unauthorized {
            message: message.unwrap_or(UNAUTHORIZED_MESSAGE).to_string(),
        })
    }

    /// Missing, invalid or revoked bearer token
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::unauthorized(Some(UNAUTHENTICATED_MESSAGE))
    }

    #[track_caller]
    pub fn forbidden(message: Option<&str>) -> Self {
        Self::new(ApiErrorKind::Forbidden {
            message: message.unwrap_or(FORBIDDEN_MESSAGE).to_string(),
        })
    }

    #[track_caller]
    pub fn internal(exception: &'static str, message: impl Into<String>, code: Option<i64>) -> Self {
        Self::new(ApiErrorKind::Internal {
            exception,
            message: message.into(),
            code,
        })
    }

    /// Replace the recorded location
    pub fn at(mut self, location: &'static Location<'static>) -> Self {
        self.location = location;
        self
    }

    pub fn kind(&self) -> &ApiErrorKind {
        &self.kind
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Name reported as `exception` in debug output and logs
    pub fn exception_name(&self) -> &'static str {
        match &self.kind {
            ApiErrorKind::Validation { .. } => "ValidationError",
            ApiErrorKind::Authentication { .. } => "AuthenticationError",
            ApiErrorKind::Database { .. } => "QueryError",
            ApiErrorKind::NotFound { .. } => "NotFoundError",
            ApiErrorKind::Unauthorized { .. } => "UnauthorizedError",
            ApiErrorKind::Forbidden { .. } => "ForbiddenError",
            ApiErrorKind::Internal { exception, .. } => *exception,
        }
    }

    /// HTTP status code for this error
    ///
    /// Unclassified database errors and internal errors without an in-range
    /// code map to 500.
    pub fn status_code(&self) -> StatusCode {
        let code = match &self.kind {
            ApiErrorKind::Validation { .. } | ApiErrorKind::Authentication { .. } => 422,
            ApiErrorKind::Database { violation, .. } => violation
                .as_ref()
                .map(ConstraintViolation::status_code)
                .unwrap_or(500),
            ApiErrorKind::NotFound { .. } => 404,
            ApiErrorKind::Unauthorized { .. } => 401,
            ApiErrorKind::Forbidden { .. } => 403,
            ApiErrorKind::Internal { code, .. } => generic_status(*code),
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// A failure's own code when it is a valid HTTP status, otherwise 500
pub fn generic_status(code: Option<i64>) -> u16 {
    match code {
        Some(code) if (100..600).contains(&code) => code as u16,
        _ => 500,
    }
}
