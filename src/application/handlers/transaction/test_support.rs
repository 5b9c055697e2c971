//! Shared wiring for transaction handler tests.

use std::sync::Arc;

use super::*;
use crate::adapters::memory::{
    InMemoryPackageRepository, InMemoryPaymentMethodRepository, InMemoryTransactionRepository,
};
use crate::domain::catalog::{
    FeeType, NewPackage, NewPaymentMethod, PaymentMethod, PaymentMethodPatch, PaymentMethodType,
    SubscriptionPackage,
};
use crate::domain::foundation::Timestamp;
use crate::domain::transaction::SubscriptionTransaction;
use crate::ports::{PackageRepository, PaymentMethodRepository, TransactionRepository};

pub struct Fixture {
    pub packages: Arc<InMemoryPackageRepository>,
    pub payment_methods: Arc<InMemoryPaymentMethodRepository>,
    pub transactions: Arc<InMemoryTransactionRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            packages: Arc::new(InMemoryPackageRepository::new()),
            payment_methods: Arc::new(InMemoryPaymentMethodRepository::new()),
            transactions: Arc::new(InMemoryTransactionRepository::new()),
        }
    }

    pub async fn seed_package(&self, price: i64) -> SubscriptionPackage {
        let package = SubscriptionPackage::create(
            NewPackage {
                name: "Bisnis".to_string(),
                price,
                duration: 1,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        self.packages.save(&package).await.unwrap();
        package
    }

    /// Fixed fee of 4 000.
    pub async fn seed_method(&self, active: bool) -> PaymentMethod {
        let now = Timestamp::now();
        let mut method = PaymentMethod::create(
            NewPaymentMethod {
                name: "BCA".to_string(),
                method_type: PaymentMethodType::Bank,
                account_name: "PT Portal".to_string(),
                account_number: "1234567890".to_string(),
                fee: 4_000.0,
                fee_type: FeeType::Fixed,
                ..Default::default()
            },
            now,
        )
        .unwrap();
        if !active {
            method
                .apply(
                    PaymentMethodPatch {
                        is_active: Some(false),
                        ..Default::default()
                    },
                    now,
                )
                .unwrap();
        }
        self.payment_methods.save(&method).await.unwrap();
        method
    }

    /// Pending guest transaction for a 100 000 package.
    pub async fn seed_transaction(&self) -> SubscriptionTransaction {
        let package = self.seed_package(100_000).await;
        let method = self.seed_method(true).await;
        let tx = SubscriptionTransaction::checkout(None, &package, &method, None, Timestamp::now())
            .unwrap();
        self.transactions.save(&tx).await.unwrap();
        tx
    }

    pub fn checkout_handler(&self) -> CheckoutHandler {
        CheckoutHandler::new(
            self.packages.clone(),
            self.payment_methods.clone(),
            self.transactions.clone(),
        )
    }

    pub fn update_status_handler(&self) -> UpdateTransactionStatusHandler {
        UpdateTransactionStatusHandler::new(self.transactions.clone())
    }

    pub fn payment_instruction_handler(&self) -> GetPaymentInstructionHandler {
        GetPaymentInstructionHandler::new(self.transactions.clone(), self.payment_methods.clone())
    }
}
