//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults suitable for development.

use serde::{Deserialize, Serialize};
use std::env;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// Origins allowed by CORS (the register frontend). Empty means
    /// permissive, for local development.
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default                 |
    /// |-----------------|-------------------------|
    /// | `API_PORT`      | `8000`                  |
    /// | `DATABASE_PATH` | `./kiosk.db`            |
    /// | `CORS_ORIGINS`  | `http://localhost:3000` |
    ///
    /// `CORS_ORIGINS` is a comma-separated list.
    pub fn load() -> Result<Self, ConfigError> {
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?;

        let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "./kiosk.db".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(ApiConfig {
            port,
            database_path,
            cors_origins,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
