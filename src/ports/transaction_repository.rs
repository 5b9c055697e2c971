//! Transaction repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TransactionId};
use crate::domain::transaction::{SubscriptionTransaction, TransactionStatus};

/// Repository port for subscription transactions.
///
/// No optimistic locking: `update` is a plain overwrite and concurrent
/// admin actions race with last-write-wins.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn save(&self, transaction: &SubscriptionTransaction) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `TransactionNotFound` if the transaction doesn't exist
    async fn update(&self, transaction: &SubscriptionTransaction) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: &TransactionId,
    ) -> Result<Option<SubscriptionTransaction>, DomainError>;

    /// Newest first, optionally restricted to one status.
    async fn list(
        &self,
        status: Option<TransactionStatus>,
    ) -> Result<Vec<SubscriptionTransaction>, DomainError>;

    /// Deleting a missing transaction is not an error.
    async fn delete(&self, id: &TransactionId) -> Result<(), DomainError>;
}
