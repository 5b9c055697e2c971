//! HS256 JWT session adapter.
//!
//! Implements both `SessionIssuer` and `SessionValidator` with a single
//! shared secret. Tokens carry the user's id, email, name, role and
//! optional company profile so request handling never touches the store
//! to learn who is calling.
//!
//! # Claims
//!
//! | claim         | meaning                               |
//! |---------------|---------------------------------------|
//! | `sub`         | user id (UUID)                        |
//! | `email`       | account email                         |
//! | `name`        | full name                             |
//! | `role`        | `member` / `admin`                    |
//! | `companyData` | company profile, omitted when absent  |
//! | `iat`, `exp`  | issue and expiry (Unix seconds)       |

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, CompanyProfile, Role, Timestamp, UserId};
use crate::ports::{IssuedSession, SessionIssuer, SessionValidator};

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    email: String,
    name: String,
    role: Role,
    #[serde(rename = "companyData", default, skip_serializing_if = "Option::is_none")]
    company_data: Option<CompanyProfile>,
    iat: i64,
    exp: i64,
}

/// Signs and verifies session tokens with an HMAC-SHA256 key.
pub struct JwtSessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl JwtSessionService {
    pub fn new(secret: &Secret<String>, ttl_secs: u64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl_secs,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }

    fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AuthError::service_unavailable("Failed to sign session token")
        })
    }
}

#[async_trait]
impl SessionIssuer for JwtSessionService {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedSession, AuthError> {
        let issued_at = Timestamp::now();
        let expires_at = issued_at.plus_secs(self.ttl_secs);

        let claims = SessionClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            company_data: user.company.clone(),
            iat: issued_at.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        Ok(IssuedSession {
            token: self.sign(&claims)?,
            expires_at,
        })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Session token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::debug!("Session token rejected: {}", e);
                    AuthError::InvalidToken
                }
            })?;
        let claims = data.claims;

        let user_id = UserId::parse(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in session token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        let mut user = AuthenticatedUser::new(user_id, claims.email, claims.name, claims.role);
        user.company = claims.company_data;
        Ok(user)
    }
}

impl std::fmt::Debug for JwtSessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtSessionService {
        JwtSessionService::new(&Secret::new("a".repeat(32)), 3600)
    }

    fn member() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "budi@example.com", "Budi", Role::Member)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Round trip
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn issued_token_validates_to_same_user() {
        let svc = service();
        let user = member().with_company(CompanyProfile {
            company_name: "PT Maju".to_string(),
            ..Default::default()
        });

        let issued = svc.issue(&user).await.unwrap();
        let back = svc.validate(&issued.token).await.unwrap();

        assert_eq!(back, user);
        assert!(issued.expires_at.is_after(&Timestamp::now()));
    }

    #[tokio::test]
    async fn company_claim_is_omitted_when_absent() {
        let svc = service();
        let issued = svc.issue(&member()).await.unwrap();

        let mut validation = JwtSessionService::validation();
        validation.insecure_disable_signature_validation();
        let raw = decode::<serde_json::Value>(
            &issued.token,
            &DecodingKey::from_secret(b"ignored"),
            &validation,
        )
        .unwrap();
        assert!(raw.claims.get("companyData").is_none());
        assert_eq!(raw.claims["role"], "member");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn token_signed_with_other_secret_is_invalid() {
        let issued = service().issue(&member()).await.unwrap();
        let other = JwtSessionService::new(&Secret::new("b".repeat(32)), 3600);

        assert_eq!(
            other.validate(&issued.token).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn expired_token_reports_expiry() {
        let svc = service();
        let past = Timestamp::now().minus_secs(7200);
        let claims = SessionClaims {
            sub: UserId::new().to_string(),
            email: "old@example.com".to_string(),
            name: "Old".to_string(),
            role: Role::Member,
            company_data: None,
            iat: past.as_unix_secs(),
            exp: past.plus_secs(60).as_unix_secs(),
        };
        let token = svc.sign(&claims).unwrap();

        assert_eq!(svc.validate(&token).await.unwrap_err(), AuthError::TokenExpired);
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        assert_eq!(
            service().validate("not.a.jwt").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn unknown_role_claim_survives_as_unknown() {
        let svc = service();
        let now = Timestamp::now();
        let claims = serde_json::json!({
            "sub": UserId::new().to_string(),
            "email": "x@example.com",
            "name": "X",
            "role": "user",
            "iat": now.as_unix_secs(),
            "exp": now.plus_secs(600).as_unix_secs(),
        });
        let token = encode(&Header::new(Algorithm::HS256), &claims, &svc.encoding_key).unwrap();

        let user = svc.validate(&token).await.unwrap();
        assert_eq!(user.role, Role::Unknown);
    }
}
