//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a UUID-backed document identifier.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parses a client-supplied id, reporting the field name on failure.
            pub fn parse(s: &str) -> Result<Self, ValidationError> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| ValidationError::invalid_format($field, "not a valid id"))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a registered user.
    UserId,
    "user_id"
);

uuid_id!(
    /// Unique identifier for a subscription package.
    PackageId,
    "package_id"
);

uuid_id!(
    /// Unique identifier for a payment method.
    PaymentMethodId,
    "payment_method_id"
);

uuid_id!(
    /// Unique identifier for a subscription transaction.
    TransactionId,
    "transaction_id"
);

uuid_id!(
    /// Unique identifier for a blog post.
    BlogPostId,
    "blog_post_id"
);
