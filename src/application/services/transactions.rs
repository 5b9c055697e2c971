//! Admin listing and removal of transactions.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, TransactionId, ValidationError};
use crate::domain::transaction::{SubscriptionTransaction, TransactionStatus};
use crate::ports::TransactionRepository;

pub struct TransactionService {
    transactions: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    /// Newest first. `status` of `None`, empty or `"all"` lists everything;
    /// any other unknown value is a validation error.
    pub async fn list(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<SubscriptionTransaction>, DomainError> {
        let filter = match status.map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(TransactionStatus::parse(raw).ok_or_else(|| {
                ValidationError::invalid_format("status", "expected pending, completed or failed")
            })?),
        };
        self.transactions.list(filter).await
    }

    pub async fn get(&self, id: &TransactionId) -> Result<SubscriptionTransaction, DomainError> {
        self.transactions.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::TransactionNotFound, "Transaction not found")
        })
    }

    pub async fn delete(&self, id: &TransactionId) -> Result<(), DomainError> {
        self.transactions.delete(id).await?;
        tracing::info!(transaction_id = %id, "transaction deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransactionRepository;
    use crate::domain::catalog::{NewPackage, NewPaymentMethod, PaymentMethod, SubscriptionPackage};
    use crate::domain::foundation::Timestamp;
    use crate::domain::transaction::TransactionAction;

    async fn seed(repo: &InMemoryTransactionRepository, settle: Option<TransactionAction>) {
        let now = Timestamp::now();
        let package = SubscriptionPackage::create(
            NewPackage {
                name: "P".to_string(),
                price: 10,
                ..Default::default()
            },
            now,
        )
        .unwrap();
        let method = PaymentMethod::create(
            NewPaymentMethod {
                name: "M".to_string(),
                ..Default::default()
            },
            now,
        )
        .unwrap();
        let mut tx = SubscriptionTransaction::checkout(None, &package, &method, None, now).unwrap();
        if let Some(action) = settle {
            tx.apply(action, now);
        }
        repo.save(&tx).await.unwrap();
    }

    #[tokio::test]
    async fn filters_by_status() {
        let repo = Arc::new(InMemoryTransactionRepository::new());
        seed(&repo, None).await;
        seed(&repo, Some(TransactionAction::Confirm)).await;
        seed(&repo, Some(TransactionAction::Reject)).await;
        let svc = TransactionService::new(repo);

        assert_eq!(svc.list(None).await.unwrap().len(), 3);
        assert_eq!(svc.list(Some("all")).await.unwrap().len(), 3);
        let completed = svc.list(Some("completed")).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].status, TransactionStatus::Completed);
    }

    #[tokio::test]
    async fn unknown_status_filter_is_rejected() {
        let svc = TransactionService::new(Arc::new(InMemoryTransactionRepository::new()));
        let err = svc.list(Some("refunded")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn delete_of_missing_transaction_succeeds() {
        let svc = TransactionService::new(Arc::new(InMemoryTransactionRepository::new()));
        assert!(svc.delete(&TransactionId::new()).await.is_ok());
        let err = svc.get(&TransactionId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TransactionNotFound);
    }
}
