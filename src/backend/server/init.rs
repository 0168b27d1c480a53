/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database setup, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the configured database
 * 2. Run the embedded migrations
 * 3. Seed default data when `seed_database` is set
 * 4. Create the application state
 * 5. Create and configure the router
 *
 * Unlike optional services, the database is required: any failure here
 * stops startup.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::database::Database;
use crate::backend::routes::router::create_router;
use crate::backend::seed::{self, SeedError};
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Startup errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("failed to seed database: {0}")]
    Seed(#[from] SeedError),
}

/// Connect, migrate, optionally seed, and build the application state
pub async fn create_state(config: ServerConfig) -> Result<AppState, InitError> {
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    if config.seed_database {
        seed::run(db.pool(), config.bcrypt_cost).await?;
    }

    Ok(AppState::new(config, db))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Sekolah Beta API server");
    if config.debug {
        tracing::warn!("Debug mode enabled: error responses include internal detail");
    }

    let state = create_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
