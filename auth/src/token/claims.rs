use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// The subject is the account login; issuance and expiry are Unix
/// timestamps. The payload carries nothing else on purpose: role and any
/// other account state are re-read from the directory at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account login)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with a fixed validity window.
    ///
    /// # Arguments
    /// * `subject` - Account login to encode as `sub`
    /// * `validity` - Time until the token expires
    pub fn for_subject(subject: impl Into<String>, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }

    /// Whether the token is expired at the given instant.
    ///
    /// A token whose expiry is at or before `current_timestamp` is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
