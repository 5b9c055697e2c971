//! VerifyOtpHandler - Confirms an email address and signs the user in.

use std::sync::Arc;

use super::SignedIn;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::user::{normalize_email, AccountError};
use crate::ports::{SessionIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct VerifyOtpCommand {
    pub email: String,
    pub otp: String,
}

/// Marks the account verified, clears the code and issues a session.
///
/// This is the passwordless sign-in path: a correct code proves control of
/// the mailbox, so no password is asked for.
pub struct VerifyOtpHandler {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionIssuer>,
}

impl VerifyOtpHandler {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionIssuer>) -> Self {
        Self { users, sessions }
    }

    pub async fn handle(&self, cmd: VerifyOtpCommand) -> Result<SignedIn, DomainError> {
        if cmd.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if cmd.otp.trim().is_empty() {
            return Err(ValidationError::empty_field("otp").into());
        }

        let email = normalize_email(&cmd.email);
        let mut user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::NotFound)?;

        let now = Timestamp::now();
        user.verify_otp(&cmd.otp, now).map_err(|e| {
            tracing::info!(user_id = %user.id, "OTP verification rejected");
            DomainError::from(e)
        })?;
        self.users.update(&user).await?;

        let session_user = user.to_session();
        let session = self.sessions.issue(&session_user).await?;

        tracing::info!(user_id = %user.id, "email verified");
        Ok(SignedIn {
            user: session_user,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::auth::test_support::Fixture;
    use crate::domain::foundation::{ErrorCode, Role};
    use crate::ports::SessionValidator;

    fn command(email: &str, otp: &str) -> VerifyOtpCommand {
        VerifyOtpCommand {
            email: email.to_string(),
            otp: otp.to_string(),
        }
    }

    #[tokio::test]
    async fn correct_code_verifies_and_signs_in() {
        let fx = Fixture::new();
        fx.seed_user("sari@example.com", "pw1234", false, Role::Member).await;

        let signed_in = fx
            .verify_otp_handler()
            .handle(command("Sari@example.com", "123456"))
            .await
            .unwrap();

        let stored = fx.users.find_by_email("sari@example.com").await.unwrap().unwrap();
        assert!(stored.is_verified);
        assert!(stored.otp.is_none());
        assert_eq!(
            fx.sessions.validate(&signed_in.session.token).await.unwrap().id,
            stored.id
        );
    }

    #[tokio::test]
    async fn wrong_code_is_rejected() {
        let fx = Fixture::new();
        fx.seed_user("sari@example.com", "pw1234", false, Role::Member).await;

        let err = fx
            .verify_otp_handler()
            .handle(command("sari@example.com", "000000"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidOtp);
        let stored = fx.users.find_by_email("sari@example.com").await.unwrap().unwrap();
        assert!(!stored.is_verified);
    }

    #[tokio::test]
    async fn code_cannot_be_used_twice() {
        let fx = Fixture::new();
        fx.seed_user("sari@example.com", "pw1234", false, Role::Member).await;
        let handler = fx.verify_otp_handler();

        handler.handle(command("sari@example.com", "123456")).await.unwrap();
        let err = handler
            .handle(command("sari@example.com", "123456"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOtp);
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let fx = Fixture::new();
        let err = fx
            .verify_otp_handler()
            .handle(command("ghost@example.com", "123456"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn blank_fields_are_validation_errors() {
        let fx = Fixture::new();
        let err = fx.verify_otp_handler().handle(command("", "1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
