//! Sekolah Beta - Main Library
//!
//! Token-authenticated web API for the Sekolah Beta school application,
//! together with an async client for it.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and the client
//!   - The JSON response envelope and pagination metadata
//!   - Field validation errors
//!   - Client configuration
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server with login / logout / current-user endpoints
//!   - Response envelope builder and database-error classification
//!   - Bearer tokens backed by a revocation table
//!   - SQLite persistence, migrations and seeding
//!
//! - **`client`** - Async HTTP client for the API
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binaries
//!
//! # Usage
//!
//! ```rust,no_run
//! use sekolah_beta::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::load()?).await?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod shared;

#[cfg(feature = "ssr")]
pub mod backend;

pub mod client;
