//! UpdateTransactionStatusHandler - Admin confirm/reject of a payment.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, TransactionId, ValidationError};
use crate::domain::transaction::{StatusChange, TransactionAction};
use crate::ports::TransactionRepository;

/// Raw admin input; both fields are required.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionStatusCommand {
    pub transaction_id: Option<String>,
    pub action: Option<String>,
}

pub struct UpdateTransactionStatusHandler {
    transactions: Arc<dyn TransactionRepository>,
}

impl UpdateTransactionStatusHandler {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    /// Last write wins. A transaction that was already settled is
    /// overwritten; the change is logged.
    pub async fn handle(
        &self,
        cmd: UpdateTransactionStatusCommand,
    ) -> Result<StatusChange, DomainError> {
        // 1. Validate input
        let raw_id = cmd
            .transaction_id
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ValidationError::empty_field("transactionId"))?;
        let raw_action = cmd
            .action
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ValidationError::empty_field("action"))?;

        let action = TransactionAction::parse(&raw_action)?;
        let id = TransactionId::parse(raw_id.trim())?;

        // 2. Load
        let mut transaction = self
            .transactions
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TransactionNotFound, "Transaction not found")
            })?;

        // 3. Apply and persist
        let change = transaction.apply(action, Timestamp::now());
        if change.overwrote_terminal() {
            tracing::warn!(
                transaction_id = %id,
                previous = %change.previous,
                current = %change.current,
                "settled transaction overwritten"
            );
        }
        self.transactions.update(&transaction).await?;

        tracing::info!(transaction_id = %id, status = %change.current, "transaction status updated");
        Ok(change)
    }
}
