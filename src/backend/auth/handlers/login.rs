/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Validate the request fields
 * 2. Look up the user by email
 * 3. Verify password using bcrypt
 * 4. Issue a bearer token named `auth_token`
 * 5. Return token and user in the success envelope
 *
 * # Security
 *
 * - Unknown email and wrong password fail identically (422 on `email`)
 * - User passwords are never returned in responses
 */

use axum::extract::State;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::LOGIN_TOKEN_NAME;
use crate::backend::auth::users::{get_user_by_email, verify_password};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::backend::response::{ApiResponse, ResponseBuilder};
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `422` - Missing/malformed fields, or credentials that do not match
/// * `500` - Database, hashing or token failures
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "admin@sekolahbeta.com", "password": "password" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "status": "success",
///   "success": true,
///   "data": {
///     "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "token_type": "Bearer",
///     "user": { "id": 1, "name": "Administrator", "email": "admin@sekolahbeta.com", ... }
///   },
///   "message": "Authenticated successfully."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<ApiResponse, ApiError> {
    let credentials = request.validate()?;
    tracing::info!("Login request for: {}", credentials.email);

    let user = get_user_by_email(state.db.pool(), &credentials.email)
        .await
        .map_err(|e| state.db.map_err(e))?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", credentials.email);
            ApiError::invalid_credentials()
        })?;

    if !verify_password(&credentials.password, &user.password)? {
        tracing::warn!("Invalid password for user: {}", credentials.email);
        return Err(ApiError::invalid_credentials());
    }

    let token = state.tokens.issue(user.id, LOGIN_TOKEN_NAME).await?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    let payload = serde_json::to_value(LoginResponse {
        access_token: token.plain_text,
        token_type: "Bearer".to_string(),
        user,
    })?;
    Ok(ResponseBuilder::default().success(payload, Some("Authenticated successfully."), 200))
}
