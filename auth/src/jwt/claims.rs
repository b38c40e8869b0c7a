use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::JwtError;

/// Identity claims carried by access tokens.
///
/// `sub` is the account identifier rendered as a string, `role` the
/// authorization tier copied from the account when the token was issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Authorization role ("admin" or "user")
    pub role: String,

    /// Token identifier, unique per issuance
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued now and expiring after `ttl`.
    ///
    /// Two calls never produce equal claims, even within the same second.
    ///
    /// # Errors
    /// * `EncodingFailed` - `now + ttl` is not a representable timestamp
    pub fn new(
        subject: impl ToString,
        role: impl ToString,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token lifetime out of range: {}", ttl))
        })?;

        Ok(Self {
            sub: subject.to_string(),
            role: role.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Override the issue and expiry timestamps.
    pub fn with_window(mut self, iat: i64, exp: i64) -> Self {
        self.iat = iat;
        self.exp = exp;
        self
    }

    /// Parse the subject into a caller-defined identifier type.
    pub fn subject<T: std::str::FromStr>(&self) -> Option<T> {
        self.sub.parse().ok()
    }
}
