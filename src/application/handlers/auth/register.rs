//! RegisterHandler - Command handler for new account sign-up.

use std::sync::Arc;

use crate::adapters::email::templates;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{normalize_email, AccountError, OneTimeCode, Registration, User};
use crate::ports::{EmailSender, PasswordHasher, UserRepository};

/// Command to register a new member account.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user_id: UserId,
    pub email: String,
}

/// Creates an unverified member and mails a one-time code.
pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    mailer: Arc<dyn EmailSender>,
    otp_ttl_secs: u64,
}

impl RegisterHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        mailer: Arc<dyn EmailSender>,
        otp_ttl_secs: u64,
    ) -> Self {
        Self {
            users,
            hasher,
            mailer,
            otp_ttl_secs,
        }
    }

    pub async fn handle(&self, cmd: RegisterCommand) -> Result<RegisterResult, DomainError> {
        let registration = Registration {
            fullname: cmd.fullname,
            email: cmd.email,
            phone: cmd.phone,
            password: cmd.password,
        };
        registration.validate()?;

        let email = normalize_email(&registration.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailTaken(email).into());
        }

        let password_hash = self.hasher.hash(&registration.password).await?;
        let now = Timestamp::now();
        let otp = OneTimeCode::generate(&mut rand::thread_rng(), now, self.otp_ttl_secs);
        let user = User::register(&registration, password_hash, otp.clone(), now);

        // A concurrent registration can still win; the store's unique email
        // constraint reports it as EmailTaken.
        self.users.save(&user).await?;

        let message = templates::otp_email(&user.email, &otp.code, self.otp_ttl_secs / 60);
        self.mailer.send(&message).await.map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "failed to send registration OTP");
            DomainError::from(e)
        })?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(RegisterResult {
            user_id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::auth::test_support::Fixture;
    use crate::domain::foundation::ErrorCode;

    fn command(email: &str) -> RegisterCommand {
        RegisterCommand {
            fullname: "Budi Santoso".to_string(),
            email: email.to_string(),
            phone: "08123456789".to_string(),
            password: "rahasia".to_string(),
        }
    }

    #[tokio::test]
    async fn registers_unverified_member_and_mails_otp() {
        let fx = Fixture::new();
        let handler = fx.register_handler();

        let result = handler.handle(command("Budi@Example.com")).await.unwrap();

        let stored = fx.users.find_by_id(&result.user_id).await.unwrap().unwrap();
        assert_eq!(stored.email, "budi@example.com");
        assert!(!stored.is_verified);
        assert_eq!(stored.password_hash, "plain:rahasia");

        let otp = stored.otp.unwrap();
        let mail = fx.mailer.last_to("budi@example.com").unwrap();
        assert!(mail.html.contains(&otp.code));
        assert!(mail.html.contains("15 menit"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_second_record() {
        let fx = Fixture::new();
        let handler = fx.register_handler();
        handler.handle(command("budi@example.com")).await.unwrap();

        let err = handler.handle(command("BUDI@example.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert_eq!(err.message, "Email already exists");
        assert_eq!(fx.users.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn short_password_is_validation_error() {
        let fx = Fixture::new();
        let mut cmd = command("a@example.com");
        cmd.password = "123".to_string();

        let err = fx.register_handler().handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(fx.users.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_email_is_validation_error() {
        let fx = Fixture::new();
        let err = fx
            .register_handler()
            .handle(command("not-an-email"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn mail_failure_surfaces_after_account_is_stored() {
        let fx = Fixture::with_failing_mailer();
        let err = fx
            .register_handler()
            .handle(command("c@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmailDeliveryFailed);
        assert!(fx.users.find_by_email("c@example.com").await.unwrap().is_some());
    }
}
