//! Credential handlers.
//!
//! ## Commands
//! - Registration with emailed one-time code
//! - OTP verification (signs the user in) and OTP resend
//! - Email/password login
//! - Password reset request and completion
//! - Company profile update
//!
//! ## Queries
//! - Reset token validation

mod forgot_password;
mod login;
mod register;
mod resend_otp;
mod reset_password;
mod update_company;
mod validate_reset_token;
mod verify_otp;

#[cfg(test)]
mod test_support;

use crate::domain::foundation::AuthenticatedUser;
use crate::ports::IssuedSession;

/// Outcome of any operation that ends with a fresh session.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: AuthenticatedUser,
    pub session: IssuedSession,
}

// Commands
pub use forgot_password::{ForgotPasswordCommand, ForgotPasswordHandler};
pub use login::{LoginCommand, LoginHandler};
pub use register::{RegisterCommand, RegisterHandler, RegisterResult};
pub use resend_otp::{ResendOtpCommand, ResendOtpHandler};
pub use reset_password::{ResetPasswordCommand, ResetPasswordHandler};
pub use update_company::{UpdateCompanyCommand, UpdateCompanyHandler};
pub use verify_otp::{VerifyOtpCommand, VerifyOtpHandler};

// Queries
pub use validate_reset_token::{ValidateResetTokenHandler, ValidateResetTokenQuery};
