//! Catalog module - what can be bought and how it can be paid for.

mod package;
mod payment_method;

pub use package::{DurationType, NewPackage, PackagePatch, SubscriptionPackage};
pub use payment_method::{
    FeeType, NewPaymentMethod, PaymentMethod, PaymentMethodPatch, PaymentMethodType,
};
