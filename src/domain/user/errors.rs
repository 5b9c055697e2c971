//! Account-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | EmailTaken | 400 |
//! | InvalidCredentials | 401 |
//! | NotVerified | 403 |
//! | InvalidOtp | 400 |
//! | InvalidResetToken | 400 |
//! | Forbidden | 403 |

use crate::domain::foundation::{DomainError, ErrorCode};

/// Account-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// No account matches the given email, name or id.
    NotFound,

    /// Registration used an email that already has an account.
    EmailTaken(String),

    /// Unknown email or wrong password. Deliberately indistinguishable.
    InvalidCredentials,

    /// Password was right but the email was never verified.
    NotVerified,

    /// OTP did not match or has expired.
    InvalidOtp,

    /// Reset token is unknown, consumed or expired.
    InvalidResetToken,

    /// Caller may not act on this account.
    Forbidden,
}

impl AccountError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::NotFound => ErrorCode::UserNotFound,
            AccountError::EmailTaken(_) => ErrorCode::EmailAlreadyRegistered,
            AccountError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AccountError::NotVerified => ErrorCode::EmailNotVerified,
            AccountError::InvalidOtp => ErrorCode::InvalidOtp,
            AccountError::InvalidResetToken => ErrorCode::InvalidResetToken,
            AccountError::Forbidden => ErrorCode::Forbidden,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            AccountError::NotFound => "User not found".to_string(),
            AccountError::EmailTaken(_) => "Email already exists".to_string(),
            AccountError::InvalidCredentials => "Invalid credentials".to_string(),
            AccountError::NotVerified => "User is not verified".to_string(),
            AccountError::InvalidOtp => "Invalid or expired OTP".to_string(),
            AccountError::InvalidResetToken => "Invalid or expired token".to_string(),
            AccountError::Forbidden => "You may not modify this account".to_string(),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<AccountError> for DomainError {
    fn from(err: AccountError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            AccountError::EmailTaken(email) => domain.with_detail("email", email),
            _ => domain,
        }
    }
}
