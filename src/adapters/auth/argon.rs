//! Argon2id implementation of the `PasswordHasher` port.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PasswordHasher;

/// Hashes with Argon2id default parameters, producing PHC strings.
///
/// Work runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn join_error(e: tokio::task::JoinError) -> DomainError {
    tracing::error!("password hashing task failed: {}", e);
    DomainError::new(ErrorCode::InternalError, "Password hashing failed")
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| {
                    tracing::error!("argon2 hashing failed: {}", e);
                    DomainError::new(ErrorCode::InternalError, "Password hashing failed")
                })
        })
        .await
        .map_err(join_error)?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let Ok(parsed) = PasswordHash::new(&hash) else {
                tracing::warn!("stored password hash is not a PHC string");
                return false;
            };
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .await
        .map_err(join_error)
    }
}
