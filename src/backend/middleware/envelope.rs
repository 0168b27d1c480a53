/**
 * Error Envelope Middleware
 *
 * `ApiError::into_response` cannot see the server configuration, so it
 * renders with debug detail hidden and stashes the error in the response
 * extensions. This middleware picks the error up again and renders the
 * final envelope with the configured debug flag and the database's error
 * adapter.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Re-render any [`ApiError`] response with the server's responder.
///
/// The error was already logged when it was first rendered, so this pass
/// does not log it again.
pub async fn render_api_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ApiError>() {
        Some(error) => state.responder().render_exception(&error).into_response(),
        None => response,
    }
}
