//! Catalog repository ports: subscription packages and payment methods.
//!
//! Deletes never check existence; removing a missing document succeeds.

use async_trait::async_trait;

use crate::domain::catalog::{PaymentMethod, SubscriptionPackage};
use crate::domain::foundation::{DomainError, PackageId, PaymentMethodId};

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn save(&self, package: &SubscriptionPackage) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `PackageNotFound` if the package doesn't exist
    async fn update(&self, package: &SubscriptionPackage) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PackageId) -> Result<Option<SubscriptionPackage>, DomainError>;

    /// All packages ordered by price, then name.
    async fn list(&self) -> Result<Vec<SubscriptionPackage>, DomainError>;

    async fn delete(&self, id: &PackageId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    async fn save(&self, method: &PaymentMethod) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `PaymentMethodNotFound` if the method doesn't exist
    async fn update(&self, method: &PaymentMethod) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PaymentMethodId) -> Result<Option<PaymentMethod>, DomainError>;

    /// All payment methods, oldest first.
    async fn list(&self) -> Result<Vec<PaymentMethod>, DomainError>;

    async fn delete(&self, id: &PaymentMethodId) -> Result<(), DomainError>;
}
