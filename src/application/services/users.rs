//! Admin views over accounts.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Role, UserId};
use crate::domain::user::{normalize_email, AccountError, User};
use crate::ports::UserRepository;

pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.list().await
    }

    /// Errors with not-found when no account has `email`.
    pub async fn delete_by_email(&self, email: &str) -> Result<(), DomainError> {
        let email = normalize_email(email);
        if !self.users.delete_by_email(&email).await? {
            return Err(AccountError::NotFound.into());
        }
        tracing::info!("user deleted by email");
        Ok(())
    }

    /// Clients are member accounts.
    pub async fn list_clients(&self) -> Result<Vec<User>, DomainError> {
        let mut users = self.users.list().await?;
        users.retain(|u| u.role == Role::Member);
        Ok(users)
    }

    pub async fn delete_client(&self, id: &UserId) -> Result<(), DomainError> {
        self.users.delete(id).await?;
        tracing::info!(user_id = %id, "client deleted");
        Ok(())
    }
}
