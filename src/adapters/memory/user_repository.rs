//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{AccountError, User};
use crate::ports::UserRepository;

/// In-memory storage for user accounts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users (useful for tests)
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AccountError::EmailTaken(user.email.clone()).into());
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::UserNotFound, "User not found")),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_name(&self, fullname: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| u.fullname == fullname)
            .min_by_key(|u| u.created_at)
            .cloned())
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| {
                u.reset_token
                    .as_ref()
                    .is_some_and(|t| t.token_hash == token_hash)
            })
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut all: Vec<User> = self.users.read().await.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|_, u| u.email != email);
        Ok(users.len() != before)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.users.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::{OneTimeCode, Registration, ResetToken};

    fn user(email: &str, name: &str) -> User {
        let now = Timestamp::now();
        User::register(
            &Registration {
                fullname: name.to_string(),
                email: email.to_string(),
                phone: "0800".to_string(),
                password: "secret1".to_string(),
            },
            "hash".to_string(),
            OneTimeCode {
                code: "123456".to_string(),
                expires_at: now.plus_secs(900),
            },
            now,
        )
    }

    #[tokio::test]
    async fn save_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("a@example.com", "A")).await.unwrap();

        let err = repo.save(&user("a@example.com", "B")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let err = repo.update(&user("a@example.com", "A")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn finds_by_email_name_and_reset_token() {
        let repo = InMemoryUserRepository::new();
        let mut u = user("a@example.com", "Alice");
        let (plain, token) = ResetToken::issue(Timestamp::now(), 3600);
        u.begin_password_reset(token, Timestamp::now());
        repo.save(&u).await.unwrap();

        assert!(repo.find_by_email("a@example.com").await.unwrap().is_some());
        assert!(repo.find_by_name("Alice").await.unwrap().is_some());
        assert!(repo.find_by_name("Bob").await.unwrap().is_none());
        let found = repo
            .find_by_reset_token_hash(&ResetToken::digest(&plain))
            .await
            .unwrap();
        assert_eq!(found.map(|f| f.id), Some(u.id));
    }

    #[tokio::test]
    async fn delete_by_email_reports_whether_anything_was_removed() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("a@example.com", "A")).await.unwrap();

        assert!(repo.delete_by_email("a@example.com").await.unwrap());
        assert!(!repo.delete_by_email("a@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn delete_by_id_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        repo.delete(&UserId::new()).await.unwrap();
    }
}
