//! Package and payment method administration plus the public pricing views.

use std::sync::Arc;

use crate::domain::catalog::{
    NewPackage, NewPaymentMethod, PackagePatch, PaymentMethod, PaymentMethodPatch,
    SubscriptionPackage,
};
use crate::domain::foundation::{DomainError, ErrorCode, PackageId, PaymentMethodId, Timestamp};
use crate::ports::{PackageRepository, PaymentMethodRepository};

fn package_not_found() -> DomainError {
    DomainError::new(ErrorCode::PackageNotFound, "Package not found")
}

fn method_not_found() -> DomainError {
    DomainError::new(ErrorCode::PaymentMethodNotFound, "Payment method not found")
}

pub struct PackageService {
    packages: Arc<dyn PackageRepository>,
}

impl PackageService {
    pub fn new(packages: Arc<dyn PackageRepository>) -> Self {
        Self { packages }
    }

    pub async fn list(&self) -> Result<Vec<SubscriptionPackage>, DomainError> {
        self.packages.list().await
    }

    /// Public pricing view.
    pub async fn list_active(&self) -> Result<Vec<SubscriptionPackage>, DomainError> {
        let mut packages = self.packages.list().await?;
        packages.retain(|p| p.is_active);
        Ok(packages)
    }

    /// Public single package; inactive packages are not found.
    pub async fn get_active(&self, id: &PackageId) -> Result<SubscriptionPackage, DomainError> {
        self.packages
            .find_by_id(id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(package_not_found)
    }

    pub async fn create(&self, input: NewPackage) -> Result<SubscriptionPackage, DomainError> {
        let package = SubscriptionPackage::create(input, Timestamp::now())?;
        self.packages.save(&package).await?;
        tracing::info!(package_id = %package.id, "package created");
        Ok(package)
    }

    pub async fn update(
        &self,
        id: &PackageId,
        patch: PackagePatch,
    ) -> Result<SubscriptionPackage, DomainError> {
        let mut package = self.packages.find_by_id(id).await?.ok_or_else(package_not_found)?;
        package.apply(patch, Timestamp::now())?;
        self.packages.update(&package).await?;
        tracing::info!(package_id = %id, "package updated");
        Ok(package)
    }

    /// Succeeds whether or not the package exists.
    pub async fn delete(&self, id: &PackageId) -> Result<(), DomainError> {
        self.packages.delete(id).await?;
        tracing::info!(package_id = %id, "package deleted");
        Ok(())
    }
}

pub struct PaymentMethodService {
    methods: Arc<dyn PaymentMethodRepository>,
}

impl PaymentMethodService {
    pub fn new(methods: Arc<dyn PaymentMethodRepository>) -> Self {
        Self { methods }
    }

    pub async fn list(&self) -> Result<Vec<PaymentMethod>, DomainError> {
        self.methods.list().await
    }

    pub async fn list_active(&self) -> Result<Vec<PaymentMethod>, DomainError> {
        let mut methods = self.methods.list().await?;
        methods.retain(|m| m.is_active);
        Ok(methods)
    }

    pub async fn create(&self, input: NewPaymentMethod) -> Result<PaymentMethod, DomainError> {
        let method = PaymentMethod::create(input, Timestamp::now())?;
        self.methods.save(&method).await?;
        tracing::info!(payment_method_id = %method.id, "payment method created");
        Ok(method)
    }

    pub async fn update(
        &self,
        id: &PaymentMethodId,
        patch: PaymentMethodPatch,
    ) -> Result<PaymentMethod, DomainError> {
        let mut method = self.methods.find_by_id(id).await?.ok_or_else(method_not_found)?;
        method.apply(patch, Timestamp::now())?;
        self.methods.update(&method).await?;
        tracing::info!(payment_method_id = %id, "payment method updated");
        Ok(method)
    }

    pub async fn delete(&self, id: &PaymentMethodId) -> Result<(), DomainError> {
        self.methods.delete(id).await?;
        tracing::info!(payment_method_id = %id, "payment method deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPackageRepository, InMemoryPaymentMethodRepository};

    fn packages() -> PackageService {
        PackageService::new(Arc::new(InMemoryPackageRepository::new()))
    }

    fn new_package(name: &str, price: i64) -> NewPackage {
        NewPackage {
            name: name.to_string(),
            price,
            duration: 12,
            ..Default::default()
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Packages
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn created_package_is_active_and_listed() {
        let svc = packages();
        let created = svc.create(new_package("Starter", 99_000)).await.unwrap();

        assert!(created.is_active);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(svc.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deactivated_package_leaves_public_views() {
        let svc = packages();
        let created = svc.create(new_package("Starter", 99_000)).await.unwrap();

        svc.update(
            &created.id,
            PackagePatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(svc.list_active().await.unwrap().is_empty());
        assert_eq!(svc.list().await.unwrap().len(), 1);
        let err = svc.get_active(&created.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PackageNotFound);
    }

    #[tokio::test]
    async fn update_of_unknown_package_is_not_found() {
        let err = packages()
            .update(&PackageId::new(), PackagePatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PackageNotFound);
    }

    #[tokio::test]
    async fn deleting_missing_package_succeeds() {
        assert!(packages().delete(&PackageId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let err = packages().create(new_package(" ", 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Payment methods
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn payment_method_lifecycle() {
        let svc = PaymentMethodService::new(Arc::new(InMemoryPaymentMethodRepository::new()));
        let created = svc
            .create(NewPaymentMethod {
                name: "QRIS".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = svc
            .update(
                &created.id,
                PaymentMethodPatch {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.is_active);
        assert!(svc.list_active().await.unwrap().is_empty());

        svc.delete(&created.id).await.unwrap();
        svc.delete(&created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
