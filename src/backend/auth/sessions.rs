/**
 * Session Management and Bearer Tokens
 *
 * Bearer tokens are HS256-signed JWTs. Every issued token also gets a row in
 * `personal_access_tokens` keyed by the JWT `jti`, so a single token can be
 * revoked by deleting its row while the user's other tokens stay valid.
 *
 * # Token Lifecycle
 *
 * 1. `issue` signs a token for a user and records it
 * 2. `authenticate` verifies the signature, checks the row still exists and
 *    stamps `last_used_at`
 * 3. `revoke` deletes the row; the token stops authenticating immediately
 */

use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::database::Database;
use crate::backend::error::ApiError;

/// Name given to tokens issued by the login endpoint
pub const LOGIN_TOKEN_NAME: &str = "auth_token";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token ID, primary key of the `personal_access_tokens` row
    pub jti: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp); absent for non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// A freshly issued bearer token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Value for the `Authorization: Bearer` header
    pub plain_text: String,
    pub id: String,
}

/// The token a request authenticated with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub id: String,
    pub user_id: i64,
}

/// Issues, authenticates and revokes bearer tokens
#[derive(Clone)]
pub struct TokenStore {
    db: Database,
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Option<Duration>,
}

impl TokenStore {
    /// # Arguments
    /// * `db` - Database holding `personal_access_tokens`
    /// * `secret` - HMAC secret used to sign tokens
    /// * `ttl` - Token lifetime; `None` issues tokens that never expire
    pub fn new(db: Database, secret: &str, ttl: Option<Duration>) -> Self {
        Self {
            db,
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked when present but not required
        validation.required_spec_claims = HashSet::from(["sub".to_string()]);
        validation
    }

    /// Sign a new token for `user_id` and record it under `name`
    pub async fn issue(&self, user_id: i64, name: &str) -> Result<IssuedToken, ApiError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires_at = self.ttl.map(|ttl| now + ttl);

        let claims = Claims {
            sub: user_id.to_string(),
            jti: id.clone(),
            iat: now.timestamp(),
            exp: expires_at.map(|at| at.timestamp()),
        };
        let plain_text = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        sqlx::query(
            r#"
            INSERT INTO personal_access_tokens (id, user_id, name, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(name)
        .bind(expires_at)
        .bind(now)
        .execute(self.db.pool())
        .await
        .map_err(|e| self.db.map_err(e))?;

        tracing::debug!("Issued token {} for user {}", id, user_id);
        Ok(IssuedToken { plain_text, id })
    }

    /// Resolve a presented bearer token.
    ///
    /// Bad signatures, expired tokens and revoked tokens all fail with
    /// `Unauthenticated.`.
    pub async fn authenticate(&self, token: &str) -> Result<AccessToken, ApiError> {
        let claims = decode::<Claims>(token, &self.decoding, &Self::validation())
            .map_err(|e| {
                tracing::warn!("Invalid token: {:?}", e);
                ApiError::unauthenticated()
            })?
            .claims;

        let user_id: i64 = claims.sub.parse().map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            ApiError::unauthenticated()
        })?;

        let result = sqlx::query(
            "UPDATE personal_access_tokens SET last_used_at = $1 WHERE id = $2 AND user_id = $3",
        )
        .bind(Utc::now())
        .bind(&claims.jti)
        .bind(user_id)
        .execute(self.db.pool())
        .await
        .map_err(|e| self.db.map_err(e))?;

        if result.rows_affected() == 0 {
            tracing::warn!("Token {} has been revoked", claims.jti);
            return Err(ApiError::unauthenticated());
        }

        Ok(AccessToken {
            id: claims.jti,
            user_id,
        })
    }

    /// Revoke one token; returns whether it existed
    pub async fn revoke(&self, token_id: &str) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM personal_access_tokens WHERE id = $1")
            .bind(token_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| self.db.map_err(e))?;
        Ok(result.rows_affected() > 0)
    }
}
