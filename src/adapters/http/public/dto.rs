//! HTTP DTOs for the public site endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::PaymentInstruction;
use crate::domain::catalog::PaymentMethod;
use crate::domain::foundation::CompanyProfile;
use crate::domain::transaction::SubscriptionTransaction;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub package_id: String,
    pub payment_method_id: String,
    pub company_data: Option<CompanyProfile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstructionResponse {
    pub transaction: SubscriptionTransaction,
    pub payment_method: Option<PaymentMethod>,
    pub fee: i64,
    pub total: i64,
}

impl From<PaymentInstruction> for PaymentInstructionResponse {
    fn from(p: PaymentInstruction) -> Self {
        Self {
            transaction: p.transaction,
            payment_method: p.payment_method,
            fee: p.fee,
            total: p.total,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
