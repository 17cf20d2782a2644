//! Session token persistence.
//!
//! The token is the only client state that survives across sessions; cart
//! contents live in memory and are rehydrated from the server. Stored as a
//! small JSON object under the key `token`.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use attire_core::SessionToken;

#[derive(Serialize, Deserialize)]
struct PersistedToken {
    token: String,
}

/// File-backed store for the session token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted token.
    ///
    /// A missing or unreadable file means guest mode, never an error:
    /// start-up must not fail because last session's token file is corrupt.
    #[must_use]
    pub fn load(&self) -> Option<SessionToken> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, path = %self.path.display(), "no persisted token");
                return None;
            }
        };

        match serde_json::from_str::<PersistedToken>(&raw) {
            Ok(persisted) if !persisted.token.is_empty() => {
                Some(SessionToken::new(persisted.token))
            }
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "persisted token unreadable; treating as guest");
                None
            }
        }
    }

    /// Persist the token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be written.
    pub fn save(&self, token: &SessionToken) -> io::Result<()> {
        let persisted = PersistedToken {
            token: token.expose().to_string(),
        };
        let raw = serde_json::to_string(&persisted).map_err(io::Error::other)?;
        std::fs::write(&self.path, raw)
    }

    /// Remove the persisted token. Already-absent is not an error.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
