//! Shared Module
//!
//! This module contains types shared between the server and the API client.
//! Everything here is transport-agnostic and serializable.
//!
//! # Overview
//!
//! - **`envelope`** - The JSON response envelope and pagination metadata
//! - **`error`** - Field-validation types
//! - **`config`** - Client-side configuration

/// Response envelope and pagination metadata
pub mod envelope;

/// Field validation types
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use envelope::{
    is_successful_status, sanitize, Envelope, Pagination, ResponseStatus,
    DEFAULT_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};
pub use error::{FieldErrors, ValidationErrors};
