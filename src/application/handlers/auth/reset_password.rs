//! ResetPasswordHandler - Consumes a reset token and sets a new password.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, ValidationError};
use crate::domain::user::{validate_password, AccountError, ResetToken};
use crate::ports::{PasswordHasher, UserRepository};

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
}

pub struct ResetPasswordHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ResetPasswordHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: ResetPasswordCommand) -> Result<(), DomainError> {
        let token = cmd.token.trim();
        if token.is_empty() {
            return Err(ValidationError::empty_field("token").into());
        }
        validate_password(&cmd.password)?;

        let mut user = self
            .users
            .find_by_reset_token_hash(&ResetToken::digest(token))
            .await?
            .ok_or(AccountError::InvalidResetToken)?;

        let now = Timestamp::now();
        if !user.has_live_reset_token(token, &now) {
            return Err(AccountError::InvalidResetToken.into());
        }

        let new_hash = self.hasher.hash(&cmd.password).await?;
        user.complete_password_reset(token, new_hash, now)?;
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "password reset completed");
        Ok(())
    }
}
