//! Unified error type for the engine.
//!
//! Local cart mutations never fail because of remote errors: sync failures
//! are swallowed inside the outbound channel and checkout failures are
//! returned as [`crate::checkout::SubmitOutcome`] values. `EngineError`
//! covers what remains: validation, preconditions, configuration, and the
//! remote calls whose result the caller asked for directly.

use thiserror::Error;

use crate::api::ApiError;
use crate::cart::CartError;
use crate::config::ConfigError;
use crate::order::OrderError;

/// Top-level error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Cart mutation rejected (e.g., missing size selection).
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Order assembly failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Backend request failed.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// Configuration is missing or invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Persisting or clearing the session token failed.
    #[error("Token persistence error: {0}")]
    TokenStore(#[source] std::io::Error),

    /// Operation requires an authenticated session.
    #[error("Not signed in")]
    NotSignedIn,
}

/// Result type alias for `EngineError`.
pub type Result<T> = std::result::Result<T, EngineError>;
