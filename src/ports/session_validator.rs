//! Session token ports.
//!
//! `SessionIssuer` mints a token after a successful sign-in;
//! `SessionValidator` turns a presented token back into an
//! `AuthenticatedUser`. One adapter usually implements both.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};

/// A freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Issues session tokens for authenticated users.
#[async_trait]
pub trait SessionIssuer: Send + Sync {
    /// Mint a token carrying the user's id, email, name, role and company.
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedSession, AuthError>;
}

/// Validates session tokens and extracts user identity.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed tokens or bad signatures
/// - `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (no `Bearer ` prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
