//! Password hashing port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// One-way password hashing.
///
/// Hashing is CPU-bound; implementations should keep it off the async
/// executor threads.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain password into a self-describing string (algorithm, salt, params).
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plain password against a stored hash.
    ///
    /// A malformed stored hash verifies as `false`, not as an error.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
