//! LoginHandler - Email and password sign-in.

use std::sync::Arc;

use super::SignedIn;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::user::{normalize_email, AccountError};
use crate::ports::{PasswordHasher, SessionIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }

    /// Unknown email and wrong password both answer `InvalidCredentials`.
    /// The verified check runs only after the password matched.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<SignedIn, DomainError> {
        if cmd.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if cmd.password.is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let email = normalize_email(&cmd.email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::info!("login with unknown email");
            return Err(AccountError::InvalidCredentials.into());
        };

        if !self.hasher.verify(&cmd.password, &user.password_hash).await? {
            tracing::info!(user_id = %user.id, "login with wrong password");
            return Err(AccountError::InvalidCredentials.into());
        }

        user.ensure_can_sign_in()?;

        let session_user = user.to_session();
        let session = self.sessions.issue(&session_user).await?;

        tracing::info!(user_id = %user.id, role = %user.role, "user signed in");
        Ok(SignedIn {
            user: session_user,
            session,
        })
    }
}
