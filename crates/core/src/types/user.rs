//! User records returned by the profile endpoint.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number. Older accounts may not have one on record.
    #[serde(default)]
    pub phone: Option<String>,
    /// Account creation timestamp as sent by the backend.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}
