//! Backend Error Module
//!
//! Error types raised by handlers, extractors and middleware, and their
//! conversion into envelope responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError / ApiErrorKind definitions
//! └── conversion.rs - From impls and IntoResponse
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use sekolah_beta::backend::error::ApiError;
//! use sekolah_beta::backend::response::ApiResponse;
//!
//! async fn handler() -> Result<ApiResponse, ApiError> {
//!     Err(ApiError::not_found(None))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{generic_status, ApiError, ApiErrorKind};
