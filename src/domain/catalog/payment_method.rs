//! Payment methods customers can pay a subscription with.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    require_text, DomainError, ErrorCode, PaymentMethodId, Timestamp, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethodType {
    #[default]
    Bank,
    EWallet,
    Qris,
    Other,
}

impl PaymentMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::Bank => "bank",
            PaymentMethodType::EWallet => "e-wallet",
            PaymentMethodType::Qris => "qris",
            PaymentMethodType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bank" => Some(PaymentMethodType::Bank),
            "e-wallet" => Some(PaymentMethodType::EWallet),
            "qris" => Some(PaymentMethodType::Qris),
            "other" => Some(PaymentMethodType::Other),
            _ => None,
        }
    }
}

/// How the `fee` figure is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    /// `fee` is an absolute amount in currency units.
    #[default]
    Fixed,
    /// `fee` is a percentage of the transaction amount.
    Percentage,
}

impl FeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::Fixed => "fixed",
            FeeType::Percentage => "percentage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fixed" => Some(FeeType::Fixed),
            "percentage" => Some(FeeType::Percentage),
            _ => None,
        }
    }
}

/// A way of paying, with the account details shown on the instruction page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    pub account_name: String,
    pub account_number: String,
    pub logo_url: String,
    pub fee: f64,
    pub fee_type: FeeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPaymentMethod {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    pub account_name: String,
    pub account_number: String,
    pub logo_url: String,
    pub fee: f64,
    pub fee_type: FeeType,
    pub instructions: Option<String>,
}

/// Partial update for a payment method.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub method_type: Option<PaymentMethodType>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub logo_url: Option<String>,
    pub fee: Option<f64>,
    pub fee_type: Option<FeeType>,
    pub instructions: Option<String>,
    pub is_active: Option<bool>,
}

fn check_fee(fee: f64) -> Result<(), ValidationError> {
    if !fee.is_finite() || fee < 0.0 {
        Err(ValidationError::invalid_format("fee", "must be a non-negative number"))
    } else {
        Ok(())
    }
}

impl PaymentMethod {
    /// Creates an active payment method.
    pub fn create(input: NewPaymentMethod, now: Timestamp) -> Result<Self, ValidationError> {
        require_text("name", &input.name)?;
        check_fee(input.fee)?;
        Ok(Self {
            id: PaymentMethodId::new(),
            name: input.name.trim().to_string(),
            description: input.description,
            method_type: input.method_type,
            account_name: input.account_name,
            account_number: input.account_number,
            logo_url: input.logo_url,
            fee: input.fee,
            fee_type: input.fee_type,
            instructions: input.instructions.filter(|s| !s.trim().is_empty()),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, patch: PaymentMethodPatch, now: Timestamp) -> Result<(), ValidationError> {
        if let Some(name) = &patch.name {
            require_text("name", name)?;
        }
        if let Some(fee) = patch.fee {
            check_fee(fee)?;
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.method_type {
            self.method_type = v;
        }
        if let Some(v) = patch.account_name {
            self.account_name = v;
        }
        if let Some(v) = patch.account_number {
            self.account_number = v;
        }
        if let Some(v) = patch.logo_url {
            self.logo_url = v;
        }
        if let Some(v) = patch.fee {
            self.fee = v;
        }
        if let Some(v) = patch.fee_type {
            self.fee_type = v;
        }
        if let Some(v) = patch.instructions {
            self.instructions = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Fee owed on `amount`, rounded to whole currency units.
    pub fn fee_for(&self, amount: i64) -> i64 {
        match self.fee_type {
            FeeType::Fixed => self.fee.round() as i64,
            FeeType::Percentage => (amount as f64 * self.fee / 100.0).round() as i64,
        }
    }

    /// Amount plus fee. Fails when the sum does not fit in an `i64`.
    pub fn total_for(&self, amount: i64) -> Result<i64, DomainError> {
        amount
            .checked_add(self.fee_for(amount))
            .ok_or_else(|| DomainError::new(ErrorCode::ValidationFailed, "Total amount out of range"))
    }
}
