/**
 * Logout Handler
 *
 * POST /api/logout revokes the token the request authenticated with. Other
 * tokens of the same user stay valid.
 */

use axum::extract::State;
use serde_json::Value;

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::response::{ApiResponse, ResponseBuilder};
use crate::backend::server::state::AppState;

/// Logout handler
///
/// Without an authenticated session there is nothing to revoke and the
/// handler still answers with the success envelope.
pub async fn logout(
    State(state): State<AppState>,
    user: Option<AuthUser>,
) -> Result<ApiResponse, ApiError> {
    if let Some(AuthUser(authenticated)) = user {
        state.tokens.revoke(&authenticated.token_id).await?;
        tracing::info!("User logged out: {}", authenticated.user.email);
    }

    Ok(ResponseBuilder::default().success(Value::Null, Some("Logged out successfully."), 200))
}
