//! UpdateCompanyHandler - Stores a company profile on an account.

use std::sync::Arc;

use super::SignedIn;
use crate::domain::foundation::{AuthenticatedUser, CompanyProfile, DomainError, Timestamp, UserId};
use crate::domain::user::AccountError;
use crate::ports::{SessionIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct UpdateCompanyCommand {
    pub user_id: UserId,
    pub company: CompanyProfile,
}

/// Saves the profile and re-issues the caller's session so the token
/// carries the new company data.
pub struct UpdateCompanyHandler {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionIssuer>,
}

impl UpdateCompanyHandler {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionIssuer>) -> Self {
        Self { users, sessions }
    }

    pub async fn handle(
        &self,
        caller: &AuthenticatedUser,
        cmd: UpdateCompanyCommand,
    ) -> Result<SignedIn, DomainError> {
        if !caller.can_act_for(&cmd.user_id) {
            tracing::warn!(caller = %caller.id, target = %cmd.user_id, "company update refused");
            return Err(AccountError::Forbidden.into());
        }

        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        user.update_company(cmd.company, Timestamp::now());
        self.users.update(&user).await?;

        // An admin editing someone else keeps their own session.
        let session_user = if caller.id == user.id {
            user.to_session()
        } else {
            caller.clone()
        };
        let session = self.sessions.issue(&session_user).await?;

        tracing::info!(user_id = %user.id, "company profile updated");
        Ok(SignedIn {
            user: session_user,
            session,
        })
    }
}
