/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container, holding:
 * - The immutable server configuration
 * - The database handle (connection pool and error adapter)
 * - The bearer-token store
 *
 * Everything in it is cheap to clone and read-only after startup. Each
 * request gets its own [`ResponseBuilder`] from [`AppState::responder`].
 *
 * # Example
 *
 * ```rust,no_run
 * use sekolah_beta::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let debug = state.config.debug;
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenStore;
use crate::backend::database::Database;
use crate::backend::response::ResponseBuilder;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub db: Database,
    pub tokens: TokenStore,
}

impl AppState {
    /// Build the state, creating the token store from the configured secret
    pub fn new(config: ServerConfig, db: Database) -> Self {
        let tokens = TokenStore::new(db.clone(), config.jwt_secret(), config.token_ttl());
        Self {
            config: Arc::new(config),
            db,
            tokens,
        }
    }

    /// A fresh response builder using the configured debug flag and the
    /// database's error adapter
    pub fn responder(&self) -> ResponseBuilder {
        ResponseBuilder::new(self.config.debug).with_adapter(self.db.adapter())
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for TokenStore {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
