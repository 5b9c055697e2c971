//! ValidateResetTokenHandler - Query: is a reset token still usable?

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::user::{AccountError, ResetToken};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct ValidateResetTokenQuery {
    pub token: String,
}

/// Pure check; the token is not consumed.
pub struct ValidateResetTokenHandler {
    users: Arc<dyn UserRepository>,
}

impl ValidateResetTokenHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: ValidateResetTokenQuery) -> Result<(), DomainError> {
        let token = query.token.trim();
        if token.is_empty() {
            return Err(AccountError::InvalidResetToken.into());
        }

        let user = self
            .users
            .find_by_reset_token_hash(&ResetToken::digest(token))
            .await?;

        match user {
            Some(user) if user.has_live_reset_token(token, &Timestamp::now()) => Ok(()),
            _ => Err(AccountError::InvalidResetToken.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::auth::test_support::Fixture;
    use crate::domain::foundation::{ErrorCode, Role};

    async fn seed_with_token(fx: &Fixture, ttl_secs: u64, issued_secs_ago: u64) -> String {
        let mut user = fx.seed_user("sari@example.com", "pw1234", true, Role::Member).await;
        let issued = Timestamp::now().minus_secs(issued_secs_ago);
        let (plain, token) = ResetToken::issue(issued, ttl_secs);
        user.begin_password_reset(token, issued);
        fx.users.update(&user).await.unwrap();
        plain
    }

    fn query(token: &str) -> ValidateResetTokenQuery {
        ValidateResetTokenQuery {
            token: token.to_string(),
        }
    }

    #[tokio::test]
    async fn live_token_is_accepted_and_not_consumed() {
        let fx = Fixture::new();
        let plain = seed_with_token(&fx, 3600, 0).await;
        let handler = fx.validate_reset_token_handler();

        assert!(handler.handle(query(&plain)).await.is_ok());
        assert!(handler.handle(query(&plain)).await.is_ok());
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let fx = Fixture::new();
        let plain = seed_with_token(&fx, 3600, 7200).await;

        let err = fx
            .validate_reset_token_handler()
            .handle(query(&plain))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidResetToken);
        assert_eq!(err.message, "Invalid or expired token");
    }

    #[tokio::test]
    async fn unknown_or_blank_token_is_rejected() {
        let fx = Fixture::new();
        let handler = fx.validate_reset_token_handler();
        assert!(handler.handle(query("nope")).await.is_err());
        assert!(handler.handle(query("")).await.is_err());
    }
}
