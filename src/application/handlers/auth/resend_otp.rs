//! ResendOtpHandler - Replaces a pending one-time code and mails it.

use std::sync::Arc;

use crate::adapters::email::templates;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::user::{normalize_email, AccountError, OneTimeCode};
use crate::ports::{EmailSender, UserRepository};

#[derive(Debug, Clone)]
pub struct ResendOtpCommand {
    pub email: String,
}

pub struct ResendOtpHandler {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn EmailSender>,
    otp_ttl_secs: u64,
}

impl ResendOtpHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        mailer: Arc<dyn EmailSender>,
        otp_ttl_secs: u64,
    ) -> Self {
        Self {
            users,
            mailer,
            otp_ttl_secs,
        }
    }

    pub async fn handle(&self, cmd: ResendOtpCommand) -> Result<(), DomainError> {
        if cmd.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }

        let email = normalize_email(&cmd.email);
        let mut user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::NotFound)?;

        let now = Timestamp::now();
        let otp = OneTimeCode::generate(&mut rand::thread_rng(), now, self.otp_ttl_secs);
        user.reissue_otp(otp.clone(), now);
        self.users.update(&user).await?;

        let message = templates::otp_email(&user.email, &otp.code, self.otp_ttl_secs / 60);
        self.mailer.send(&message).await.map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "failed to resend OTP");
            DomainError::from(e)
        })?;

        tracing::info!(user_id = %user.id, "OTP reissued");
        Ok(())
    }
}
