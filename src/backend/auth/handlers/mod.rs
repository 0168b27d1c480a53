//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request/response types and login validation
//! ├── login.rs    - POST /api/login
//! ├── logout.rs   - POST /api/logout
//! └── user.rs     - GET /api/user
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → credentials verified → bearer token returned
//! 2. **User**: bearer token → token verified → user returned
//! 3. **Logout**: bearer token → that token revoked
//!
//! # Example
//!
//! ```rust,no_run
//! use sekolah_beta::backend::auth::handlers::{current_user, login, logout};
//! use sekolah_beta::backend::server::state::AppState;
//! use axum::{routing::get, routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/login", post(login))
//!     .route("/logout", post(logout))
//!     .route("/user", get(current_user));
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod user;

pub use login::login;
pub use logout::logout;
pub use user::current_user;
