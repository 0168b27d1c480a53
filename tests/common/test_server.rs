//! HTTP test server helpers
//!
//! Wraps the real router in an `axum_test::TestServer` and keeps the
//! application state at hand for direct database access.

use axum_test::TestServer;
use sekolah_beta::backend::routes::create_router;
use sekolah_beta::backend::server::AppState;

use super::auth_helpers::{create_test_user, TEST_EMAIL, TEST_PASSWORD};
use super::database::create_test_state;

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    pub async fn new(debug: bool) -> Self {
        let state = create_test_state(debug).await;
        let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");
        Self { server, state }
    }

    /// App with one user, `TEST_EMAIL` / `TEST_PASSWORD`
    pub async fn with_user(debug: bool) -> Self {
        let app = Self::new(debug).await;
        create_test_user(app.state.db.pool(), "Guru", TEST_EMAIL, TEST_PASSWORD).await;
        app
    }
}
