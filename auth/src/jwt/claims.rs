use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Session token payload.
///
/// `sub` identifies the principal, `exp` is always `iat` plus the issuing
/// window. Both are required when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Principal display name
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for a principal, issued now and valid for `window`.
    ///
    /// # Errors
    /// * `EncodingFailed` - `window` pushes `exp` past the representable range
    pub fn for_subject(
        sub: impl ToString,
        username: impl ToString,
        window: Duration,
    ) -> Result<Self, JwtError> {
        Self::issued_at(sub, username, Utc::now(), window)
    }

    /// Claims issued at an explicit instant.
    ///
    /// # Errors
    /// * `EncodingFailed` - `window` pushes `exp` past the representable range
    pub fn issued_at(
        sub: impl ToString,
        username: impl ToString,
        issued_at: DateTime<Utc>,
        window: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at.checked_add_signed(window).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token window of {} is out of range", window))
        })?;

        Ok(Self {
            sub: sub.to_string(),
            username: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Seconds between issuance and expiry.
    pub fn lifetime_secs(&self) -> i64 {
        self.exp - self.iat
    }

    /// Check if token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
