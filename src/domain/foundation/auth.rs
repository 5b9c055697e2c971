//! Authentication types for the domain layer.
//!
//! These types describe who is making a request once a session token has
//! been validated. They have no dependency on the token format; the
//! `SessionValidator` port populates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{CompanyProfile, DomainError, ErrorCode, UserId};

/// Account role stored on the user and carried in the session.
///
/// Anything other than `member` or `admin` deserializes to `Unknown` so a
/// tampered or legacy role never grants access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Parses a stored role string. Unrecognized values map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "member" => Role::Member,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user extracted from a validated session token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub company: Option<CompanyProfile>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user without a company profile.
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
            company: None,
        }
    }

    /// Attaches a company profile.
    pub fn with_company(mut self, company: CompanyProfile) -> Self {
        self.company = Some(company);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True when the caller is `user_id` or an administrator.
    pub fn can_act_for(&self, user_id: &UserId) -> bool {
        self.is_admin() || &self.id == user_id
    }
}

/// Authentication errors that can occur during token handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Session is valid but the role does not permit the action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// Signing or hashing failed for reasons outside the caller's control.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        let code = match err {
            AuthError::InvalidToken | AuthError::TokenExpired => ErrorCode::Unauthorized,
            AuthError::InsufficientPermissions => ErrorCode::Forbidden,
            AuthError::ServiceUnavailable(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}
