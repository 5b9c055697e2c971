//! HTTP DTOs for the admin console.

use serde::Deserialize;

use crate::domain::blog::BlogPostPatch;
use crate::domain::catalog::{PackagePatch, PaymentMethodPatch};

/// `{id}` body used by deletes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdRequest {
    pub id: Option<String>,
}

/// `?id=` query used by payment method deletes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusQuery {
    pub status: Option<String>,
}

/// `{id, ...fields}` body used by updates.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest<P> {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub patch: P,
}

pub type UpdatePackageRequest = UpdateRequest<PackagePatch>;
pub type UpdatePaymentMethodRequest = UpdateRequest<PaymentMethodPatch>;
pub type UpdateBlogPostRequest = UpdateRequest<BlogPostPatch>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionActionRequest {
    pub id: Option<String>,
    pub action: Option<String>,
}
