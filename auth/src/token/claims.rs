use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// The wire form is `{"userId": "...", "iat": ..., "exp": ...}` with Unix
/// second timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Identifier of the authenticated user.
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, expiring `expires_in_seconds` from now.
    pub fn new(user_id: impl ToString, expires_in_seconds: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + expires_in_seconds,
        }
    }
}
