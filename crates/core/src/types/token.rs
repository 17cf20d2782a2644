//! Opaque session credential.

use secrecy::{ExposeSecret, SecretString};

/// Opaque credential identifying an authenticated user to the backend.
///
/// Sent verbatim in the `token` request header. Absence means guest mode:
/// cart mutations stay local-only and are never mirrored remotely.
///
/// Implements `Debug` with the value redacted so tokens never leak into
/// logs or error reports.
#[derive(Clone)]
pub struct SessionToken(SecretString);

impl SessionToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Expose the raw token for use in a request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
