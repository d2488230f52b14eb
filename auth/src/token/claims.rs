use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Seconds a token stays valid after issuance.
pub const TOKEN_VALIDITY_SECS: i64 = 60 * 60;

/// Claims carried by an access token.
///
/// The payload identifies the user by numeric id and brackets the token
/// lifetime with issued-at and expiration timestamps. Every token gets the
/// same fixed validity window; there is no per-token override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    ///
    /// # Returns
    /// Claims expiring one hour from now
    pub fn for_user(user_id: i64) -> Self {
        Self::issued_at(user_id, Utc::now().timestamp())
    }

    /// Create claims with an explicit issued-at timestamp.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `iat` - Issued-at time (Unix timestamp)
    ///
    /// # Returns
    /// Claims expiring one hour after `iat`
    pub fn issued_at(user_id: i64, iat: i64) -> Self {
        Self {
            id: user_id,
            iat,
            exp: iat + TOKEN_VALIDITY_SECS,
        }
    }

    /// Check if the claims are expired at the given timestamp.
    ///
    /// The boundary is inclusive: claims are expired from the exact
    /// expiration second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
