/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts the bearer token from the Authorization
 * header, resolves it through the token store and attaches the user and
 * token to the request for handlers.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user and the token the request presented
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
    /// ID of the presented token, used to revoke it on logout
    pub token_id: String,
}

/// Token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Authenticates it against the token store
/// 3. Loads the token's user
/// 4. Attaches [`AuthenticatedUser`] to request extensions
///
/// Any failure answers with the 401 `Unauthenticated.` envelope.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::unauthenticated()
        })?;

    let access = state.tokens.authenticate(token).await?;

    let user = get_user_by_id(state.db.pool(), access.user_id)
        .await
        .map_err(|e| state.db.map_err(e))?
        .ok_or_else(|| {
            tracing::warn!("User not found for token: {}", access.user_id);
            ApiError::unauthenticated()
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user,
        token_id: access.id,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user set by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated()
            })?;

        Ok(AuthUser(user))
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<AuthenticatedUser>().cloned().map(AuthUser))
    }
}
