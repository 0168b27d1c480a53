//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the schema enforces the
//! constraints the API relies on.

use sekolah_beta::backend::database::Database;
use sekolah_beta::backend::error::ApiErrorKind;
use sekolah_beta::backend::seed;
use tempfile::TempDir;

use crate::common::{create_test_database, create_test_user};

#[tokio::test]
async fn test_migrations_create_tables() {
    let db = create_test_database().await;

    for table in ["users", "personal_access_tokens", "settings"] {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = $1",
        )
        .bind(table)
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(count, 1, "table {} should exist", table);
    }
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = create_test_database().await;
    assert!(db.migrate().await.is_ok());
}

#[tokio::test]
async fn test_duplicate_email_is_classified() {
    let db = create_test_database().await;
    create_test_user(db.pool(), "Guru", "guru@sekolahbeta.com", "password").await;

    let err = sekolah_beta::backend::auth::users::create_user(
        db.pool(),
        "Guru 2",
        "guru@sekolahbeta.com",
        "hash",
    )
    .await
    .unwrap_err();
    let api_error = db.map_err(err);

    assert_eq!(api_error.status_code().as_u16(), 409);
    match api_error.kind() {
        ApiErrorKind::Database { violation, .. } => assert!(violation.is_some()),
        other => panic!("expected database error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_deleting_user_revokes_tokens() {
    let db = create_test_database().await;
    let user = create_test_user(db.pool(), "Siswa", "siswa@sekolahbeta.com", "password").await;
    let tokens = sekolah_beta::backend::auth::TokenStore::new(db.clone(), "secret", None);
    tokens.issue(user.id, "auth_token").await.unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(db.pool())
        .await
        .unwrap();

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM personal_access_tokens")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_file_database_persists_seed() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("app.sqlite").display());

    {
        let db = Database::connect(&url).await.unwrap();
        db.migrate().await.unwrap();
        seed::run(db.pool(), 4).await.unwrap();
        db.close().await;
    }

    let db = Database::connect(&url).await.unwrap();
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(users, 3);
}
