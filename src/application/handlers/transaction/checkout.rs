//! CheckoutHandler - Opens a pending subscription transaction.

use std::sync::Arc;

use crate::domain::foundation::{
    AuthenticatedUser, CompanyProfile, DomainError, ErrorCode, PackageId, PaymentMethodId,
    Timestamp,
};
use crate::domain::transaction::SubscriptionTransaction;
use crate::ports::{PackageRepository, PaymentMethodRepository, TransactionRepository};

#[derive(Debug, Clone)]
pub struct CheckoutCommand {
    pub package_id: PackageId,
    pub payment_method_id: PaymentMethodId,
    pub company: Option<CompanyProfile>,
}

/// Records a purchase for a member or a guest.
pub struct CheckoutHandler {
    packages: Arc<dyn PackageRepository>,
    payment_methods: Arc<dyn PaymentMethodRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl CheckoutHandler {
    pub fn new(
        packages: Arc<dyn PackageRepository>,
        payment_methods: Arc<dyn PaymentMethodRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            packages,
            payment_methods,
            transactions,
        }
    }

    pub async fn handle(
        &self,
        buyer: Option<&AuthenticatedUser>,
        cmd: CheckoutCommand,
    ) -> Result<SubscriptionTransaction, DomainError> {
        // 1. Resolve what is being bought and how
        let package = self
            .packages
            .find_by_id(&cmd.package_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::PackageNotFound, "Package not found"))?;

        let method = self
            .payment_methods
            .find_by_id(&cmd.payment_method_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::PaymentMethodNotFound, "Payment method not found")
            })?;

        // 2. Open the transaction (rejects inactive methods)
        let transaction =
            SubscriptionTransaction::checkout(buyer, &package, &method, cmd.company, Timestamp::now())?;

        // 3. Persist
        self.transactions.save(&transaction).await?;

        tracing::info!(
            transaction_id = %transaction.id,
            package_id = %package.id,
            guest = transaction.is_guest(),
            amount = transaction.amount,
            "transaction opened"
        );
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::transaction::test_support::Fixture;
    use crate::domain::foundation::{Role, UserId};
    use crate::domain::transaction::{TransactionStatus, GUEST_EMAIL};

    #[tokio::test]
    async fn guest_checkout_records_placeholder_buyer() {
        let fx = Fixture::new();
        let package = fx.seed_package(250_000).await;
        let method = fx.seed_method(true).await;

        let tx = fx
            .checkout_handler()
            .handle(
                None,
                CheckoutCommand {
                    package_id: package.id,
                    payment_method_id: method.id,
                    company: None,
                },
            )
            .await
            .unwrap();

        assert!(tx.is_guest());
        assert_eq!(tx.user_email, GUEST_EMAIL);
        assert_eq!(tx.amount, 250_000);
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert!(fx.transactions.find_by_id(&tx.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn member_checkout_uses_session_company() {
        let fx = Fixture::new();
        let package = fx.seed_package(100_000).await;
        let method = fx.seed_method(true).await;
        let company = CompanyProfile {
            company_name: "PT Maju".to_string(),
            ..Default::default()
        };
        let buyer = AuthenticatedUser::new(UserId::new(), "m@example.com", "M", Role::Member)
            .with_company(company.clone());

        let tx = fx
            .checkout_handler()
            .handle(
                Some(&buyer),
                CheckoutCommand {
                    package_id: package.id,
                    payment_method_id: method.id,
                    company: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(tx.user_id, Some(buyer.id));
        assert_eq!(tx.company, Some(company));
    }

    #[tokio::test]
    async fn unknown_package_is_not_found() {
        let fx = Fixture::new();
        let method = fx.seed_method(true).await;

        let err = fx
            .checkout_handler()
            .handle(
                None,
                CheckoutCommand {
                    package_id: PackageId::new(),
                    payment_method_id: method.id,
                    company: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PackageNotFound);
    }

    #[tokio::test]
    async fn inactive_method_is_refused_and_nothing_is_stored() {
        let fx = Fixture::new();
        let package = fx.seed_package(100_000).await;
        let method = fx.seed_method(false).await;

        let err = fx
            .checkout_handler()
            .handle(
                None,
                CheckoutCommand {
                    package_id: package.id,
                    payment_method_id: method.id,
                    company: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::PaymentMethodInactive);
        assert!(fx.transactions.list(None).await.unwrap().is_empty());
    }
}
