//! User repository port.
//!
//! Defines the contract for persisting and retrieving user accounts.
//! Email addresses are stored normalized (see `normalize_email`), so
//! lookups by email are exact matches on the normalized form.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository port for user accounts.
///
/// Implementations must enforce email uniqueness.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyRegistered` if the email is taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Replace an existing user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Exact match on full name. Returns the first match if several exist.
    async fn find_by_name(&self, fullname: &str) -> Result<Option<User>, DomainError>;

    /// Find the user holding a reset token with this digest, live or not.
    async fn find_by_reset_token_hash(&self, token_hash: &str)
        -> Result<Option<User>, DomainError>;

    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Delete by email. Returns false if nothing was deleted.
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Delete by id. Deleting a missing user is not an error.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
