//! Password reset tokens.
//!
//! The plain token only ever leaves the system inside the reset email.
//! Storage keeps its SHA-256 digest so a leaked table cannot be replayed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::foundation::Timestamp;

/// Default reset token validity window (1 hour).
pub const DEFAULT_RESET_TOKEN_TTL_SECS: u64 = 60 * 60;

/// Stored half of a password reset token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetToken {
    pub token_hash: String,
    pub expires_at: Timestamp,
}

impl ResetToken {
    /// Mints a new token. Returns the plain value to mail and the record to store.
    pub fn issue(now: Timestamp, ttl_secs: u64) -> (String, Self) {
        let plain = Uuid::new_v4().to_string();
        let record = Self {
            token_hash: Self::digest(&plain),
            expires_at: now.plus_secs(ttl_secs),
        };
        (plain, record)
    }

    /// Hex SHA-256 of a plain token.
    pub fn digest(plain: &str) -> String {
        format!("{:x}", Sha256::digest(plain.trim().as_bytes()))
    }

    /// True while the token may still be redeemed.
    pub fn is_live(&self, now: &Timestamp) -> bool {
        !self.expires_at.has_passed(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_stores_digest_not_plain_value() {
        let (plain, record) = ResetToken::issue(Timestamp::now(), 3600);
        assert_ne!(plain, record.token_hash);
        assert_eq!(record.token_hash, ResetToken::digest(&plain));
        assert_eq!(record.token_hash.len(), 64);
    }

    #[test]
    fn plain_token_is_a_uuid() {
        let (plain, _) = ResetToken::issue(Timestamp::now(), 3600);
        assert!(Uuid::parse_str(&plain).is_ok());
    }

    #[test]
    fn token_is_live_until_expiry() {
        let now = Timestamp::now();
        let (_, record) = ResetToken::issue(now, 3600);
        assert!(record.is_live(&now));
        assert!(record.is_live(&now.plus_secs(3599)));
        assert!(!record.is_live(&now.plus_secs(3600)));
    }

    #[test]
    fn digest_ignores_surrounding_whitespace() {
        assert_eq!(ResetToken::digest(" abc "), ResetToken::digest("abc"));
    }
}
