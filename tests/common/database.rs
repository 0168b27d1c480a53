//! Database test fixtures and utilities
//!
//! Every fixture is a private in-memory SQLite database with migrations
//! applied, so tests never share data.

use sekolah_beta::backend::database::Database;
use sekolah_beta::backend::server::{AppState, ServerConfig};

/// Secret tests sign tokens with
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Lowest bcrypt cost, to keep hashing fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Create a migrated in-memory database
pub async fn create_test_database() -> Database {
    let db = Database::connect_in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

/// Configuration for tests: in-memory database, fixed secret, cheap hashing
pub fn test_config(debug: bool) -> ServerConfig {
    ServerConfig {
        debug,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: Some(TEST_JWT_SECRET.to_string()),
        bcrypt_cost: TEST_BCRYPT_COST,
        frontend_dir: None,
        ..ServerConfig::default()
    }
}

/// Application state over a fresh database
pub async fn create_test_state(debug: bool) -> AppState {
    AppState::new(test_config(debug), create_test_database().await)
}
