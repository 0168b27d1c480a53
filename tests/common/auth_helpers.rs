//! Authentication test helpers
//!
//! Provides utilities for creating test users and logging them in.

use sekolah_beta::backend::auth::users::{create_user, hash_password, User};
use sqlx::SqlitePool;

use super::database::TEST_BCRYPT_COST;
use super::test_server::TestApp;

pub const TEST_EMAIL: &str = "guru@sekolahbeta.com";
pub const TEST_PASSWORD: &str = "password";

/// Create a user with a bcrypt-hashed password
pub async fn create_test_user(pool: &SqlitePool, name: &str, email: &str, password: &str) -> User {
    let hash = hash_password(password, TEST_BCRYPT_COST).expect("Failed to hash password");
    create_user(pool, name, email, &hash)
        .await
        .expect("Failed to create test user")
}

/// Log in through the API and return the bearer token
pub async fn login_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .server
        .post("/api/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["data"]["access_token"]
        .as_str()
        .expect("login response carries data.access_token")
        .to_string()
}
