//! Authentication Module
//!
//! This module handles user authentication and bearer-token sessions.
//!
//! # Architecture
//!
//! - **`users`** - User data model, password hashing and database operations
//! - **`sessions`** - Bearer token issue / authenticate / revoke
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed JWTs backed by a `personal_access_tokens` row, so
//!   logging out revokes exactly the presented token
//! - Invalid credentials return the same 422 whether or not the email exists

/// User data model and database operations
pub mod users;

/// Bearer token management
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{Credentials, LoginRequest, LoginResponse};
pub use handlers::{current_user, login, logout};
pub use sessions::{AccessToken, IssuedToken, TokenStore};
pub use users::User;
