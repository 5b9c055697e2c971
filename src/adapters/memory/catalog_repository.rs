//! In-memory package and payment method repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{PaymentMethod, SubscriptionPackage};
use crate::domain::foundation::{DomainError, ErrorCode, PackageId, PaymentMethodId};
use crate::ports::{PackageRepository, PaymentMethodRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPackageRepository {
    packages: Arc<RwLock<HashMap<PackageId, SubscriptionPackage>>>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn save(&self, package: &SubscriptionPackage) -> Result<(), DomainError> {
        self.packages.write().await.insert(package.id, package.clone());
        Ok(())
    }

    async fn update(&self, package: &SubscriptionPackage) -> Result<(), DomainError> {
        let mut packages = self.packages.write().await;
        match packages.get_mut(&package.id) {
            Some(slot) => {
                *slot = package.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::PackageNotFound, "Package not found")),
        }
    }

    async fn find_by_id(&self, id: &PackageId) -> Result<Option<SubscriptionPackage>, DomainError> {
        Ok(self.packages.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<SubscriptionPackage>, DomainError> {
        let mut all: Vec<_> = self.packages.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(&b.name)));
        Ok(all)
    }

    async fn delete(&self, id: &PackageId) -> Result<(), DomainError> {
        self.packages.write().await.remove(id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentMethodRepository {
    methods: Arc<RwLock<HashMap<PaymentMethodId, PaymentMethod>>>,
}

impl InMemoryPaymentMethodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentMethodRepository for InMemoryPaymentMethodRepository {
    async fn save(&self, method: &PaymentMethod) -> Result<(), DomainError> {
        self.methods.write().await.insert(method.id, method.clone());
        Ok(())
    }

    async fn update(&self, method: &PaymentMethod) -> Result<(), DomainError> {
        let mut methods = self.methods.write().await;
        match methods.get_mut(&method.id) {
            Some(slot) => {
                *slot = method.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PaymentMethodNotFound,
                "Payment method not found",
            )),
        }
    }

    async fn find_by_id(&self, id: &PaymentMethodId) -> Result<Option<PaymentMethod>, DomainError> {
        Ok(self.methods.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<PaymentMethod>, DomainError> {
        let mut all: Vec<_> = self.methods.read().await.values().cloned().collect();
        all.sort_by_key(|m| m.created_at);
        Ok(all)
    }

    async fn delete(&self, id: &PaymentMethodId) -> Result<(), DomainError> {
        self.methods.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{NewPackage, NewPaymentMethod};
    use crate::domain::foundation::Timestamp;

    fn package(name: &str, price: i64) -> SubscriptionPackage {
        SubscriptionPackage::create(
            NewPackage {
                name: name.to_string(),
                price,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn packages_list_cheapest_first() {
        let repo = InMemoryPackageRepository::new();
        repo.save(&package("Business", 500)).await.unwrap();
        repo.save(&package("Starter", 100)).await.unwrap();

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Starter", "Business"]);
    }

    #[tokio::test]
    async fn package_update_requires_existing_row() {
        let repo = InMemoryPackageRepository::new();
        let err = repo.update(&package("Ghost", 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PackageNotFound);
    }

    #[tokio::test]
    async fn deleting_missing_payment_method_succeeds() {
        let repo = InMemoryPaymentMethodRepository::new();
        repo.delete(&PaymentMethodId::new()).await.unwrap();

        let method = PaymentMethod::create(
            NewPaymentMethod {
                name: "BCA".to_string(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        repo.save(&method).await.unwrap();
        repo.delete(&method.id).await.unwrap();
        assert!(repo.find_by_id(&method.id).await.unwrap().is_none());
    }
}
