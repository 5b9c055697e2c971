//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Minimum length of the HS256 signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted lifetime for sessions, codes and reset tokens (ten years).
pub const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Session and credential-recovery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 key used to sign session tokens
    pub session_secret: Secret<String>,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// One-time code lifetime in seconds
    #[serde(default = "default_otp_ttl")]
    pub otp_ttl_secs: u64,

    /// Password reset token lifetime in seconds
    #[serde(default = "default_reset_token_ttl")]
    pub reset_token_ttl_secs: u64,
}

impl AuthConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.session_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SESSION_SECRET"));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::SessionSecretTooShort(MIN_SECRET_LEN));
        }
        if !(1..=MAX_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(ValidationError::InvalidTtl("session_ttl_secs"));
        }
        if !(1..=MAX_TTL_SECS).contains(&self.otp_ttl_secs) {
            return Err(ValidationError::InvalidTtl("otp_ttl_secs"));
        }
        if !(1..=MAX_TTL_SECS).contains(&self.reset_token_ttl_secs) {
            return Err(ValidationError::InvalidTtl("reset_token_ttl_secs"));
        }
        if self.cookie_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__COOKIE_NAME"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: Secret::new(String::new()),
            session_ttl_secs: default_session_ttl(),
            cookie_name: default_cookie_name(),
            otp_ttl_secs: default_otp_ttl(),
            reset_token_ttl_secs: default_reset_token_ttl(),
        }
    }
}

fn default_session_ttl() -> u64 {
    30 * 24 * 60 * 60
}

fn default_cookie_name() -> String {
    "session_token".to_string()
}

fn default_otp_ttl() -> u64 {
    15 * 60
}

fn default_reset_token_ttl() -> u64 {
    60 * 60
}
