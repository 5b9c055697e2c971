//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionIssuer`, `SessionValidator` and
//! `PasswordHasher` ports without signing keys or CPU-heavy hashing.
//!
//! # Example
//!
//! ```ignore
//! use bizportal::adapters::auth::MockSessionValidator;
//! use bizportal::domain::foundation::{AuthenticatedUser, Role, UserId};
//!
//! let validator = MockSessionValidator::new().with_user(
//!     "valid-token",
//!     AuthenticatedUser::new(UserId::new(), "test@example.com", "Test User", Role::Member),
//! );
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{
    AuthError, AuthenticatedUser, DomainError, ErrorCode, Role, Timestamp, UserId,
};
use crate::ports::{IssuedSession, PasswordHasher, SessionIssuer, SessionValidator};

/// Mock session store for testing.
///
/// Issued tokens are opaque `mock-<n>` strings remembered in a map; tokens not
/// in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

fn poisoned() -> AuthError {
    AuthError::service_unavailable("mock session store poisoned")
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a token for a fresh user with the given role.
    pub fn with_test_user(self, token: impl Into<String>, role: Role) -> Self {
        let token = token.into();
        let user = AuthenticatedUser::new(
            UserId::new(),
            format!("{}@test.example.com", token),
            format!("Test User {}", token),
            role,
        );
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        if let Ok(mut slot) = self.force_error.write() {
            *slot = Some(error);
        }
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(token.into(), user);
        }
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.remove(token);
        }
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.read().map(|t| t.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SessionIssuer for MockSessionValidator {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedSession, AuthError> {
        let mut tokens = self.tokens.write().map_err(|_| poisoned())?;
        let token = format!("mock-{}", tokens.len() + 1);
        tokens.insert(token.clone(), user.clone());
        Ok(IssuedSession {
            token,
            expires_at: Timestamp::now().plus_secs(3600),
        })
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().map_err(|_| poisoned())?.clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .map_err(|_| poisoned())?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Reversible "hash" for tests: `plain:<password>`.
#[derive(Debug, Default, Clone)]
pub struct MockPasswordHasher {
    fail: bool,
}

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an internal error.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::new(ErrorCode::InternalError, "Password hashing failed"));
        }
        Ok(format!("plain:{}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        if self.fail {
            return Err(DomainError::new(ErrorCode::InternalError, "Password hashing failed"));
        }
        Ok(hash.strip_prefix("plain:") == Some(password))
    }
}
