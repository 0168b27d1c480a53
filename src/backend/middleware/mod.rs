//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//! - **`envelope`** - Final rendering of error envelopes with the server's
//!   debug flag
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use sekolah_beta::backend::auth::current_user;
//! use sekolah_beta::backend::middleware::auth_middleware;
//! use sekolah_beta::backend::server::state::AppState;
//!
//! # fn example(state: AppState) {
//! let protected: Router<AppState> = Router::new()
//!     .route("/user", get(current_user))
//!     .route_layer(middleware::from_fn_with_state(state, auth_middleware));
//! # }
//! ```

pub mod auth;
pub mod envelope;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use envelope::render_api_errors;
