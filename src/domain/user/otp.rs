//! Six-digit one-time codes for email verification.

use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::domain::foundation::Timestamp;

/// Default OTP validity window (15 minutes).
pub const DEFAULT_OTP_TTL_SECS: u64 = 15 * 60;

/// A pending verification code and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimeCode {
    pub code: String,
    pub expires_at: Timestamp,
}

impl OneTimeCode {
    /// Draws a fresh code in `100000..=999999`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, ttl_secs: u64) -> Self {
        let code: u32 = rng.gen_range(100_000..1_000_000);
        Self {
            code: code.to_string(),
            expires_at: now.plus_secs(ttl_secs),
        }
    }

    pub fn is_expired(&self, now: &Timestamp) -> bool {
        self.expires_at.has_passed(now)
    }

    /// Checks a submitted code. Comparison is constant time.
    pub fn matches(&self, candidate: &str, now: &Timestamp) -> bool {
        if self.is_expired(now) {
            return false;
        }
        let candidate = candidate.trim();
        candidate.len() == self.code.len()
            && bool::from(self.code.as_bytes().ct_eq(candidate.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: &str, expires_at: Timestamp) -> OneTimeCode {
        OneTimeCode {
            code: value.to_string(),
            expires_at,
        }
    }

    #[test]
    fn generated_codes_have_six_digits() {
        let mut rng = rand::thread_rng();
        let now = Timestamp::now();
        for _ in 0..200 {
            let otp = OneTimeCode::generate(&mut rng, now, DEFAULT_OTP_TTL_SECS);
            assert_eq!(otp.code.len(), 6);
            assert!(otp.code.chars().all(|c| c.is_ascii_digit()));
            assert!(!otp.code.starts_with('0'));
        }
    }

    #[test]
    fn generated_code_expires_after_ttl() {
        let now = Timestamp::now();
        let otp = OneTimeCode::generate(&mut rand::thread_rng(), now, 900);
        assert_eq!(otp.expires_at, now.plus_secs(900));
        assert!(!otp.is_expired(&now));
        assert!(otp.is_expired(&now.plus_secs(900)));
    }

    #[test]
    fn matches_accepts_correct_unexpired_code() {
        let now = Timestamp::now();
        let otp = code("123456", now.plus_secs(60));
        assert!(otp.matches("123456", &now));
        assert!(otp.matches(" 123456 ", &now));
    }

    #[test]
    fn matches_rejects_wrong_code() {
        let now = Timestamp::now();
        let otp = code("123456", now.plus_secs(60));
        assert!(!otp.matches("654321", &now));
        assert!(!otp.matches("12345", &now));
        assert!(!otp.matches("", &now));
    }

    #[test]
    fn matches_rejects_expired_code() {
        let now = Timestamp::now();
        let otp = code("123456", now.minus_secs(1));
        assert!(!otp.matches("123456", &now));
    }
}
