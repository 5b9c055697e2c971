//! In-memory transaction repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, TransactionId};
use crate::domain::transaction::{SubscriptionTransaction, TransactionStatus};
use crate::ports::TransactionRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionRepository {
    transactions: Arc<RwLock<HashMap<TransactionId, SubscriptionTransaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn save(&self, transaction: &SubscriptionTransaction) -> Result<(), DomainError> {
        self.transactions
            .write()
            .await
            .insert(transaction.id, transaction.clone());
        Ok(())
    }

    async fn update(&self, transaction: &SubscriptionTransaction) -> Result<(), DomainError> {
        let mut transactions = self.transactions.write().await;
        match transactions.get_mut(&transaction.id) {
            Some(slot) => {
                *slot = transaction.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::TransactionNotFound,
                "Transaction not found",
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: &TransactionId,
    ) -> Result<Option<SubscriptionTransaction>, DomainError> {
        Ok(self.transactions.read().await.get(id).cloned())
    }

    async fn list(
        &self,
        status: Option<TransactionStatus>,
    ) -> Result<Vec<SubscriptionTransaction>, DomainError> {
        let transactions = self.transactions.read().await;
        let mut matching: Vec<_> = transactions
            .values()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn delete(&self, id: &TransactionId) -> Result<(), DomainError> {
        self.transactions.write().await.remove(id);
        Ok(())
    }
}
