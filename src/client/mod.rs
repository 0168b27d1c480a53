//! API Client Module
//!
//! Async client for the Sekolah Beta API, with the request/response
//! behaviour a browser frontend expects: bearer-token injection, a loading
//! indicator, success/error toasts, session-expiry handling and 422 field
//! errors.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs      - Module exports and documentation
//! ├── api.rs      - ApiClient
//! ├── error.rs    - ClientError
//! ├── notify.rs   - Notifier trait and toasts
//! ├── storage.rs  - Token storage
//! └── types.rs    - Request options and payload types
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use sekolah_beta::client::{ApiClient, Credentials};
//! use sekolah_beta::shared::AppConfig;
//!
//! # async fn example() -> Result<(), sekolah_beta::client::ClientError> {
//! let client = ApiClient::new(AppConfig::default())?;
//! let user = client
//!     .login(&Credentials::new("admin@sekolahbeta.com", "password"))
//!     .await?;
//! println!("Logged in as {}", user.name);
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod notify;
pub mod storage;
pub mod types;

pub use api::{ApiClient, DASHBOARD_PATH, LOGIN_PATH};
pub use error::{ClientError, UNEXPECTED_ERROR_MESSAGE};
pub use notify::{Notifier, Toast, ToastVariant, TracingNotifier};
pub use storage::{MemoryTokenStorage, TokenStorage};
pub use types::{Credentials, RequestOptions, UserProfile};
