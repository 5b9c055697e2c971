//! Application layer - Commands, Queries, Handlers and resource services.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers own multi-step workflows (sign-up, checkout, settlement);
//! services cover plain list/create/update/delete over one collection.

pub mod handlers;
pub mod services;

pub use handlers::*;
pub use services::{
    BlogService, PackageService, PaymentMethodService, TransactionService, UserDirectory,
};
