//! Backend Module
//!
//! This module contains all server-side code for the Sekolah Beta API: an
//! Axum HTTP server with bearer-token authentication and a uniform JSON
//! response envelope.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, bearer tokens and the authentication endpoints
//! - **`middleware`** - Authentication and error-envelope middleware
//! - **`response`** - The response envelope builder and failure rendering
//! - **`error`** - `ApiError` and conversions from library errors
//! - **`database`** - Connection pool and driver-error classification
//! - **`extract`** - Request body extractor
//! - **`seed`** - Default accounts and settings
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── response/       - Envelope builder
//! ├── error/          - Error types
//! ├── database/       - Pool and error adapters
//! ├── extract.rs      - ApiJson extractor
//! └── seed.rs         - Seeder
//! ```
//!
//! # Endpoints
//!
//! - `POST /api/login` - Credentials in, bearer token out
//! - `POST /api/logout` - Revoke the presented token
//! - `GET /api/user` - Current user, unwrapped
//! - `GET /up` - Health probe
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Every failure is logged and
//! rendered as an envelope; the server's debug flag decides whether
//! internal detail is included.

pub mod auth;
pub mod database;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod seed;
pub mod server;

pub use error::ApiError;
pub use response::{ApiResponse, ResponseBuilder};
pub use server::{create_app, AppState, ServerConfig};
