/**
 * Database Seeder
 *
 * Creates the default accounts and site settings. Safe to run repeatedly:
 * accounts are only inserted when their email is absent and settings are
 * upserted by key.
 */

use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::users::{create_user, get_user_by_email, hash_password, mark_email_verified};

/// Password of every seeded account
pub const DEFAULT_PASSWORD: &str = "password";

/// `(name, email)` of the seeded accounts
pub const DEFAULT_USERS: [(&str, &str); 3] = [
    ("Administrator", "admin@sekolahbeta.com"),
    ("Guru", "guru@sekolahbeta.com"),
    ("Siswa", "siswa@sekolahbeta.com"),
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("invalid setting value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What a seeder run changed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub users_skipped: usize,
    pub settings_written: usize,
}

/// Default site settings as `(key, value)` pairs
pub fn default_settings() -> Vec<(&'static str, Value)> {
    vec![
        (
            "site_config",
            json!({
                "app_name": "Sekolah Beta",
                "app_logo": "/assets/logo.png",
                "meta_description": "Aplikasi Sekolah Beta Laravel + Vue",
                "theme_color": "#000000",
            }),
        ),
        (
            "contact_info",
            json!({
                "email": "admin@sekolahbeta.com",
                "phone": "+62 812 3456 7890",
                "address": "Jakarta, Indonesia",
            }),
        ),
        (
            "feature_flags",
            json!({
                "enable_registration": true,
                "enable_notifications": false,
            }),
        ),
    ]
}

/// Seed accounts and settings
pub async fn run(pool: &SqlitePool, bcrypt_cost: u32) -> Result<SeedReport, SeedError> {
    tracing::info!("Seeding database...");

    let mut report = seed_users(pool, bcrypt_cost).await?;
    report.settings_written = seed_settings(pool).await?;

    tracing::info!(
        "Seeding finished: {} users created, {} skipped, {} settings written",
        report.users_created,
        report.users_skipped,
        report.settings_written
    );
    Ok(report)
}

async fn seed_users(pool: &SqlitePool, bcrypt_cost: u32) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    let password_hash = hash_password(DEFAULT_PASSWORD, bcrypt_cost)?;

    for (name, email) in DEFAULT_USERS {
        if get_user_by_email(pool, email).await?.is_some() {
            tracing::debug!("User already exists, skipping: {}", email);
            report.users_skipped += 1;
            continue;
        }

        let user = create_user(pool, name, email, &password_hash).await?;
        mark_email_verified(pool, user.id).await?;
        tracing::info!("Seeded user: {} <{}>", name, email);
        report.users_created += 1;
    }

    Ok(report)
}

async fn seed_settings(pool: &SqlitePool) -> Result<usize, SeedError> {
    let settings = default_settings();
    let now = Utc::now();

    for (key, value) in &settings {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(serde_json::to_string(value)?)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    }

    Ok(settings.len())
}

/// Read one setting's JSON value
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<Value>, SeedError> {
    let raw: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    raw.map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(SeedError::from)
}
