//! Shared wiring for credential handler tests.

use std::sync::Arc;

use super::*;
use crate::adapters::auth::{MockPasswordHasher, MockSessionValidator};
use crate::adapters::email::RecordingEmailSender;
use crate::adapters::memory::InMemoryUserRepository;
use crate::domain::foundation::{Role, Timestamp};
use crate::domain::user::{OneTimeCode, Registration, User};
use crate::ports::UserRepository;

pub const BASE_URL: &str = "http://portal.test";

pub struct Fixture {
    pub users: Arc<InMemoryUserRepository>,
    pub hasher: Arc<MockPasswordHasher>,
    pub sessions: Arc<MockSessionValidator>,
    pub mailer: Arc<RecordingEmailSender>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_mailer(RecordingEmailSender::new())
    }

    pub fn with_failing_mailer() -> Self {
        Self::with_mailer(RecordingEmailSender::failing())
    }

    fn with_mailer(mailer: RecordingEmailSender) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            hasher: Arc::new(MockPasswordHasher::new()),
            sessions: Arc::new(MockSessionValidator::new()),
            mailer: Arc::new(mailer),
        }
    }

    /// Stores an account with password `password` and the given state.
    pub async fn seed_user(&self, email: &str, password: &str, verified: bool, role: Role) -> User {
        let now = Timestamp::now();
        let registration = Registration {
            fullname: format!("User {}", email),
            email: email.to_string(),
            phone: "0800".to_string(),
            password: password.to_string(),
        };
        let otp = OneTimeCode {
            code: "123456".to_string(),
            expires_at: now.plus_secs(900),
        };
        let mut user = User::register(&registration, format!("plain:{}", password), otp, now);
        if verified {
            user.is_verified = true;
            user.otp = None;
        }
        user.role = role;
        self.users.save(&user).await.unwrap();
        user
    }

    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(self.users.clone(), self.hasher.clone(), self.mailer.clone(), 900)
    }

    pub fn verify_otp_handler(&self) -> VerifyOtpHandler {
        VerifyOtpHandler::new(self.users.clone(), self.sessions.clone())
    }

    pub fn resend_otp_handler(&self) -> ResendOtpHandler {
        ResendOtpHandler::new(self.users.clone(), self.mailer.clone(), 900)
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.users.clone(), self.hasher.clone(), self.sessions.clone())
    }

    pub fn forgot_password_handler(&self) -> ForgotPasswordHandler {
        ForgotPasswordHandler::new(self.users.clone(), self.mailer.clone(), BASE_URL, 3600)
    }

    pub fn validate_reset_token_handler(&self) -> ValidateResetTokenHandler {
        ValidateResetTokenHandler::new(self.users.clone())
    }

    pub fn reset_password_handler(&self) -> ResetPasswordHandler {
        ResetPasswordHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn update_company_handler(&self) -> UpdateCompanyHandler {
        UpdateCompanyHandler::new(self.users.clone(), self.sessions.clone())
    }
}
