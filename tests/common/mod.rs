//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory database fixtures
//! - An HTTP test server over the real router
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
#[cfg(feature = "ssr")]
pub mod auth_helpers;
#[cfg(feature = "ssr")]
pub mod database;
pub mod notifier;
#[cfg(feature = "ssr")]
pub mod test_server;

#[cfg(feature = "ssr")]
pub use auth_helpers::*;
#[cfg(feature = "ssr")]
pub use database::*;
pub use notifier::*;
#[cfg(feature = "ssr")]
pub use test_server::*;
