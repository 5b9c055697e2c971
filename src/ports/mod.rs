//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! One typed repository per document collection:
//! `UserRepository`, `PackageRepository`, `PaymentMethodRepository`,
//! `TransactionRepository`, `BlogPostRepository`.
//!
//! ## Security Ports
//!
//! - `PasswordHasher` - one-way password hashing
//! - `SessionIssuer` / `SessionValidator` - session token lifecycle
//!
//! ## Delivery Ports
//!
//! - `EmailSender` - transactional email

mod blog_post_repository;
mod catalog_repository;
mod email_sender;
mod password_hasher;
mod session_validator;
mod transaction_repository;
mod user_repository;

pub use blog_post_repository::BlogPostRepository;
pub use catalog_repository::{PackageRepository, PaymentMethodRepository};
pub use email_sender::{EmailError, EmailSender, OutboundEmail};
pub use password_hasher::PasswordHasher;
pub use session_validator::{IssuedSession, SessionIssuer, SessionValidator};
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
