//! HTTP DTOs for the credential endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SignedIn;
use crate::domain::foundation::{AuthenticatedUser, CompanyProfile, Role, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[serde(alias = "email")]
    pub email_or_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub company_data: CompanyProfile,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredResponse {
    pub user_id: UserId,
    pub email: String,
}

/// Session claims as the frontend sees them.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(rename = "companyData", skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
}

impl From<AuthenticatedUser> for SessionUserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            company: user.company,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedInResponse {
    pub token: String,
    pub expires_at: Timestamp,
    pub user: SessionUserResponse,
}

impl From<SignedIn> for SignedInResponse {
    fn from(signed_in: SignedIn) -> Self {
        Self {
            token: signed_in.session.token,
            expires_at: signed_in.session.expires_at,
            user: signed_in.user.into(),
        }
    }
}
