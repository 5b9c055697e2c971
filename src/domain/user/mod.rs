//! User module - accounts, verification codes and password reset.

mod aggregate;
mod errors;
mod otp;
mod reset_token;

pub use aggregate::{normalize_email, validate_password, Registration, User, MIN_PASSWORD_LEN};
pub use errors::AccountError;
pub use otp::{OneTimeCode, DEFAULT_OTP_TTL_SECS};
pub use reset_token::{ResetToken, DEFAULT_RESET_TOKEN_TTL_SECS};
