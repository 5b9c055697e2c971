//! ForgotPasswordHandler - Issues a reset token and mails the link.

use std::sync::Arc;

use crate::adapters::email::templates;
use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::user::{normalize_email, AccountError, ResetToken, User};
use crate::ports::{EmailSender, UserRepository};

#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
    /// Account email, or the account's full name.
    pub email_or_name: String,
}

pub struct ForgotPasswordHandler {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn EmailSender>,
    app_base_url: String,
    reset_token_ttl_secs: u64,
}

impl ForgotPasswordHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        mailer: Arc<dyn EmailSender>,
        app_base_url: impl Into<String>,
        reset_token_ttl_secs: u64,
    ) -> Self {
        Self {
            users,
            mailer,
            app_base_url: app_base_url.into(),
            reset_token_ttl_secs,
        }
    }

    async fn lookup(&self, email_or_name: &str) -> Result<Option<User>, DomainError> {
        if let Some(user) = self.users.find_by_email(&normalize_email(email_or_name)).await? {
            return Ok(Some(user));
        }
        self.users.find_by_name(email_or_name).await
    }

    pub async fn handle(&self, cmd: ForgotPasswordCommand) -> Result<(), DomainError> {
        let needle = cmd.email_or_name.trim();
        if needle.is_empty() {
            return Err(ValidationError::empty_field("emailOrName").into());
        }

        let mut user = self.lookup(needle).await?.ok_or(AccountError::NotFound)?;

        let now = Timestamp::now();
        let (plain, token) = ResetToken::issue(now, self.reset_token_ttl_secs);
        user.begin_password_reset(token, now);
        self.users.update(&user).await?;

        let link = templates::reset_link(&self.app_base_url, &plain);
        let message = templates::password_reset_email(&user.email, &user.fullname, &link);
        self.mailer.send(&message).await.map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "failed to send reset email");
            DomainError::from(e)
        })?;

        tracing::info!(user_id = %user.id, "password reset requested");
        Ok(())
    }
}
