//! Transaction module - subscription purchases and their settlement.

mod aggregate;
mod status;

pub use aggregate::{
    StatusChange, SubscriptionTransaction, GUEST_EMAIL, GUEST_NAME, GUEST_USER_ID,
};
pub use status::{TransactionAction, TransactionStatus};
