//! GetPaymentInstructionHandler - Query for the payment instruction page.

use std::sync::Arc;

use crate::domain::catalog::PaymentMethod;
use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, TransactionId};
use crate::domain::transaction::SubscriptionTransaction;
use crate::ports::{PaymentMethodRepository, TransactionRepository};

#[derive(Debug, Clone)]
pub struct GetPaymentInstructionQuery {
    pub transaction_id: TransactionId,
}

/// What a buyer needs to complete payment.
#[derive(Debug, Clone)]
pub struct PaymentInstruction {
    pub transaction: SubscriptionTransaction,
    /// `None` when the method was deleted after checkout.
    pub payment_method: Option<PaymentMethod>,
    pub fee: i64,
    pub total: i64,
}

pub struct GetPaymentInstructionHandler {
    transactions: Arc<dyn TransactionRepository>,
    payment_methods: Arc<dyn PaymentMethodRepository>,
}

impl GetPaymentInstructionHandler {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        payment_methods: Arc<dyn PaymentMethodRepository>,
    ) -> Self {
        Self {
            transactions,
            payment_methods,
        }
    }

    /// A transaction the viewer may not see answers not-found, the same as
    /// one that does not exist.
    pub async fn handle(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetPaymentInstructionQuery,
    ) -> Result<PaymentInstruction, DomainError> {
        let not_found = || DomainError::new(ErrorCode::TransactionNotFound, "Transaction not found");

        let transaction = self
            .transactions
            .find_by_id(&query.transaction_id)
            .await?
            .ok_or_else(not_found)?;

        if !transaction.is_visible_to(viewer) {
            tracing::info!(transaction_id = %transaction.id, "payment instruction hidden from viewer");
            return Err(not_found());
        }

        let payment_method = self
            .payment_methods
            .find_by_id(&transaction.payment_method_id)
            .await?;

        let (fee, total) = match &payment_method {
            Some(method) => (
                method.fee_for(transaction.amount),
                method.total_for(transaction.amount)?,
            ),
            None => (0, transaction.amount),
        };

        Ok(PaymentInstruction {
            fee,
            total,
            transaction,
            payment_method,
        })
    }
}
