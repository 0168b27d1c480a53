/**
 * API Route Handlers
 *
 * This module defines the routes nested under `/api`.
 *
 * # Routes
 *
 * - `POST /api/login` - Exchange credentials for a bearer token
 * - `POST /api/logout` - Revoke the presented token (requires authentication)
 * - `GET /api/user` - Current user (requires authentication)
 *
 * Any other path under `/api` answers with the 404 envelope.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{current_user, login, logout};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `state` - Application state, needed by the authentication middleware
///
/// # Returns
///
/// Router to be nested under `/api`
///
/// # Authentication
///
/// `/logout` and `/user` sit behind [`auth_middleware`], which answers a
/// missing or invalid bearer token with the 401 `Unauthenticated.` envelope.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route("/user", get(current_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(login))
        .merge(protected)
        .fallback(api_not_found)
}

async fn api_not_found() -> ApiError {
    ApiError::not_found(None)
}
