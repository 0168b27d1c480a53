/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration.
 *
 * # Configuration Sources
 *
 * 1. Built-in defaults suitable for local development
 * 2. An optional TOML file named by `APP_CONFIG`
 * 3. Environment variables (a `.env` file is loaded by the binary first)
 *
 * Later sources override earlier ones.
 *
 * # Environment Variables
 *
 * | Variable            | Field               | Default                              |
 * |---------------------|---------------------|--------------------------------------|
 * | `APP_DEBUG`         | `debug`             | `false`                              |
 * | `DATABASE_URL`      | `database_url`      | `sqlite://database.sqlite?mode=rwc`  |
 * | `JWT_SECRET`        | `jwt_secret`        | development secret (logged warning)  |
 * | `TOKEN_TTL_MINUTES` | `token_ttl_minutes` | tokens never expire                  |
 * | `SERVER_HOST`       | `host`              | `0.0.0.0`                            |
 * | `SERVER_PORT`       | `port`              | `8000`                               |
 * | `FRONTEND_ORIGINS`  | `frontend_origins`  | `http://localhost:5173`              |
 * | `FRONTEND_DIR`      | `frontend_dir`      | none                                 |
 * | `SEED_DATABASE`     | `seed_database`     | `false`                              |
 * | `BCRYPT_COST`       | `bcrypt_cost`       | `bcrypt::DEFAULT_COST`               |
 */

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_FILE_ENV: &str = "APP_CONFIG";

/// Signing secret used when `JWT_SECRET` is not configured
const DEVELOPMENT_JWT_SECRET: &str = "sekolah-beta-development-secret";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Expose internal error detail in responses
    pub debug: bool,
    pub database_url: String,
    pub jwt_secret: Option<String>,
    /// Token lifetime in minutes; `None` means tokens never expire
    pub token_ttl_minutes: Option<i64>,
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS
    pub frontend_origins: Vec<String>,
    /// Built frontend served for non-API paths
    pub frontend_dir: Option<PathBuf>,
    /// Run the seeder at startup
    pub seed_database: bool,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            database_url: "sqlite://database.sqlite?mode=rwc".to_string(),
            jwt_secret: None,
            token_ttl_minutes: None,
            host: "0.0.0.0".to_string(),
            port: 8000,
            frontend_origins: vec!["http://localhost:5173".to_string()],
            frontend_dir: None,
            seed_database: false,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration reading variables through `lookup`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the config file cannot be read or
    /// parsed, or when a variable holds an unparseable value.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_FILE_ENV) {
            Some(path) if !path.trim().is_empty() => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_toml_file(path.trim())?
            }
            _ => Self::default(),
        };

        config.apply_env(&lookup)?;

        if config.jwt_secret.is_none() {
            tracing::warn!("JWT_SECRET not set. Using the development signing secret.");
        }

        Ok(config)
    }

    /// Parse a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        validate_bcrypt_cost(config.bcrypt_cost)?;
        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("APP_DEBUG") {
            self.debug = parse_bool("APP_DEBUG", &value)?;
        }
        if let Some(value) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database_url = value.trim().to_string();
        }
        if let Some(value) = lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            self.jwt_secret = Some(value);
        }
        if let Some(value) = lookup("TOKEN_TTL_MINUTES") {
            self.token_ttl_minutes = match value.trim() {
                "" => None,
                raw => Some(parse_number("TOKEN_TTL_MINUTES", raw)?),
            };
        }
        if let Some(value) = lookup("SERVER_HOST").filter(|v| !v.trim().is_empty()) {
            self.host = value.trim().to_string();
        }
        if let Some(value) = lookup("SERVER_PORT") {
            self.port = parse_number("SERVER_PORT", &value)?;
        }
        if let Some(value) = lookup("FRONTEND_ORIGINS") {
            self.frontend_origins = value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = lookup("FRONTEND_DIR") {
            self.frontend_dir = Some(value.trim())
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from);
        }
        if let Some(value) = lookup("SEED_DATABASE") {
            self.seed_database = parse_bool("SEED_DATABASE", &value)?;
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = parse_number("BCRYPT_COST", &value)?;
            validate_bcrypt_cost(self.bcrypt_cost)?;
        }
        Ok(())
    }

    /// Secret used to sign bearer tokens
    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or(DEVELOPMENT_JWT_SECRET)
    }

    /// Token lifetime, if tokens expire
    pub fn token_ttl(&self) -> Option<chrono::Duration> {
        self.token_ttl_minutes.map(chrono::Duration::minutes)
    }

    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn validate_bcrypt_cost(cost: u32) -> Result<(), ConfigError> {
    if (4..=31).contains(&cost) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: "BCRYPT_COST",
            value: cost.to_string(),
        })
    }
}
