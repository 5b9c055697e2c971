//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the portal domain.

mod auth;
mod company;
mod email;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, Role};
pub use company::CompanyProfile;
pub use email::{is_valid_email, require_email, require_text};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BlogPostId, PackageId, PaymentMethodId, TransactionId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
