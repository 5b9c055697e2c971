//! Subscription transaction handlers.
//!
//! ## Commands
//! - Checkout (member or guest)
//! - Admin confirm/reject
//!
//! ## Queries
//! - Payment instruction for a transaction

mod checkout;
mod get_payment_instruction;
mod update_status;

#[cfg(test)]
mod test_support;

pub use checkout::{CheckoutCommand, CheckoutHandler};
pub use get_payment_instruction::{
    GetPaymentInstructionHandler, GetPaymentInstructionQuery, PaymentInstruction,
};
pub use update_status::{UpdateTransactionStatusCommand, UpdateTransactionStatusHandler};
