//! Client configuration module
//!
//! Configuration for code that talks to the API over HTTP.

use thiserror::Error;

/// Default API base URL, matching the development server port
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server URL, without a trailing slash
    pub server_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Full URL for an API path such as `/api/login`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.server_url)
            .map_err(|_| ConfigError::InvalidUrl(self.server_url.clone()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(ConfigError::InvalidUrl(self.server_url.clone())),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?
            .trim_end_matches('/')
            .to_string();
        let config = AppConfig { server_url };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
