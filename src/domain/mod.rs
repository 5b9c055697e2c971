//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `access` - Route guard deciding which pages a session may open
//! - `user` - Accounts, one-time codes and password reset tokens
//! - `catalog` - Subscription packages and payment methods
//! - `transaction` - Subscription transactions and their status lifecycle
//! - `blog` - Blog posts and slugs
//! - `contact` - Contact form submissions

pub mod access;
pub mod blog;
pub mod catalog;
pub mod contact;
pub mod foundation;
pub mod transaction;
pub mod user;
