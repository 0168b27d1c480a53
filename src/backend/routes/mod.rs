//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware stack
//! └── api_routes.rs   - Routes nested under /api
//! ```

pub mod api_routes;
pub mod router;

pub use api_routes::configure_api_routes;
pub use router::create_router;
