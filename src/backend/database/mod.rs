//! Database Module
//!
//! Connection pool, migrations and driver-error classification.
//!
//! # Module Structure
//!
//! ```text
//! database/
//! ├── mod.rs       - Database handle (pool + error adapter)
//! ├── classify.rs  - ConstraintViolation and the DbErrorAdapter trait
//! ├── extract.rs   - Identifier extraction from MySQL messages
//! ├── mysql.rs     - MySQL / MariaDB adapter
//! ├── postgres.rs  - PostgreSQL adapter
//! └── sqlite.rs    - SQLite adapter
//! ```
//!
//! The server runs on SQLite. The MySQL and PostgreSQL adapters classify
//! messages coming from those backends when the same error contract has to
//! be reproduced against them.

pub mod classify;
pub mod extract;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

use std::panic::Location;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::error::ApiError;

pub use classify::{adapter_for_url, ConstraintViolation, DbErrorAdapter};

/// Maximum pooled connections for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Connection pool paired with the error adapter for its backend
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    adapter: Arc<dyn DbErrorAdapter>,
}

impl Database {
    /// Connect to `url`, creating the database file when it does not exist.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        if url.contains(":memory:") {
            return Self::connect_in_memory().await;
        }

        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        tracing::info!("Database connection pool created successfully");
        Ok(Self::from_pool(pool, adapter_for_url(url)))
    }

    /// Private in-memory database.
    ///
    /// Every connection to `:memory:` opens a fresh database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self::from_pool(pool, adapter_for_url("sqlite::memory:")))
    }

    pub fn from_pool(pool: SqlitePool, adapter: Arc<dyn DbErrorAdapter>) -> Self {
        Self { pool, adapter }
    }

    /// Run the embedded migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Shared handle to this backend's error adapter
    pub fn adapter(&self) -> Arc<dyn DbErrorAdapter> {
        Arc::clone(&self.adapter)
    }

    /// Convert a driver error into an [`ApiError`], classifying database
    /// failures with this backend's adapter.
    #[track_caller]
    pub fn map_err(&self, err: sqlx::Error) -> ApiError {
        let location = Location::caller();
        match err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                let violation = self.adapter.classify(&message);
                if let Some(violation) = &violation {
                    tracing::debug!(
                        "{} adapter classified database error as {}",
                        self.adapter.backend(),
                        violation.label()
                    );
                }
                ApiError::database(message, violation).at(location)
            }
            other => ApiError::from(other).at(location),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
