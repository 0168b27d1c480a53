/**
 * Current User Handler
 *
 * GET /api/user returns the authenticated user as a bare JSON object, not
 * wrapped in the envelope. Existing clients read the fields at the top
 * level, so this endpoint keeps that shape.
 */

use axum::Json;

use crate::backend::auth::users::User;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "name": "Administrator",
///   "email": "admin@sekolahbeta.com",
///   "email_verified_at": null,
///   "created_at": "2025-01-01T00:00:00Z",
///   "updated_at": "2025-01-01T00:00:00Z"
/// }
/// ```
pub async fn current_user(AuthUser(authenticated): AuthUser) -> Json<User> {
    Json(authenticated.user)
}
