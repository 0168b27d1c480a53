/**
 * Authentication Handler Types
 *
 * Request and response types used by the login, logout and current-user
 * handlers, and validation of the login request.
 */

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::error::ValidationErrors;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("invalid email pattern"));

/// Login request
///
/// Fields are optional so that missing ones surface as field validation
/// errors rather than as a body parse failure.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Credentials that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Check required fields and the email format.
    ///
    /// The email is trimmed; the password is taken as sent.
    pub fn validate(self) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = self
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        match &email {
            None => errors.add("email", "The email field is required."),
            Some(email) if !EMAIL.is_match(email) => {
                errors.add("email", "The email field must be a valid email address.")
            }
            Some(_) => {}
        }

        let password = self.password.filter(|password| !password.is_empty());
        if password.is_none() {
            errors.add("password", "The password field is required.");
        }

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Credentials { email, password }),
            _ => Err(errors),
        }
    }
}

/// Payload of a successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header
    pub access_token: String,
    /// Always `"Bearer"`
    pub token_type: String,
    pub user: User,
}
