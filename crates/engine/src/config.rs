//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ATTIRE_BACKEND_URL` - Base URL of the order/product backend
//!
//! ## Optional
//! - `ATTIRE_DELIVERY_FEE` - Flat delivery fee added at checkout (default: 10)
//! - `ATTIRE_REQUEST_TIMEOUT_SECS` - Timeout for backend requests (default: 10)
//! - `ATTIRE_TOKEN_FILE` - Path for the persisted session token
//!   (default: .attire-token.json)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

const DEFAULT_DELIVERY_FEE: &str = "10";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "10";
const DEFAULT_TOKEN_FILE: &str = ".attire-token.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the backend (e.g., <https://api.attire.example>).
    pub backend_url: Url,
    /// Flat delivery fee added to every assembled order. Advisory, like the
    /// rest of the client-computed total.
    pub delivery_fee: Decimal,
    /// Per-request timeout for backend calls.
    pub request_timeout: Duration,
    /// Where the session token is persisted between sessions.
    pub token_file: PathBuf,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend_url = get_required_env("ATTIRE_BACKEND_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ATTIRE_BACKEND_URL".to_string(), e.to_string())
            })?;
        let delivery_fee =
            Decimal::from_str(&get_env_or_default("ATTIRE_DELIVERY_FEE", DEFAULT_DELIVERY_FEE))
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("ATTIRE_DELIVERY_FEE".to_string(), e.to_string())
                })?;
        let timeout_secs = get_env_or_default(
            "ATTIRE_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("ATTIRE_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        let token_file =
            PathBuf::from(get_env_or_default("ATTIRE_TOKEN_FILE", DEFAULT_TOKEN_FILE));

        Ok(Self {
            backend_url,
            delivery_fee,
            request_timeout: Duration::from_secs(timeout_secs),
            token_file,
        })
    }

    /// Build a configuration with defaults for everything but the backend
    /// URL. Used by tests and embedders that configure programmatically.
    #[must_use]
    pub fn new(backend_url: Url) -> Self {
        Self {
            backend_url,
            delivery_fee: Decimal::new(10, 0),
            request_timeout: Duration::from_secs(10),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
