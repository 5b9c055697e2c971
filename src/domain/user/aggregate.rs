//! User aggregate entity.

use serde::{Deserialize, Serialize};

use super::{AccountError, OneTimeCode, ResetToken};
use crate::domain::foundation::{
    require_email, require_text, AuthenticatedUser, CompanyProfile, Role, Timestamp, UserId,
    ValidationError,
};

/// Minimum password length for registration and reset.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Lowercases and trims an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks a new password against the length rule.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::empty_field("password"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::too_short("password", MIN_PASSWORD_LEN));
    }
    Ok(())
}

/// Raw registration input, validated before the password is hashed.
#[derive(Debug, Clone)]
pub struct Registration {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("fullname", &self.fullname)?;
        require_email("email", &self.email)?;
        require_text("phone", &self.phone)?;
        validate_password(&self.password)
    }
}

/// A portal account.
///
/// # Invariants
///
/// - `email` is normalized and unique across users
/// - a verified user carries no pending OTP
/// - `password_hash` is never serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_verified: bool,
    #[serde(skip)]
    pub otp: Option<OneTimeCode>,
    #[serde(skip)]
    pub reset_token: Option<ResetToken>,
    pub role: Role,
    #[serde(rename = "companyData", skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Creates an unverified member from validated registration input.
    pub fn register(
        registration: &Registration,
        password_hash: String,
        otp: OneTimeCode,
        now: Timestamp,
    ) -> Self {
        Self {
            id: UserId::new(),
            fullname: registration.fullname.trim().to_string(),
            email: normalize_email(&registration.email),
            phone: registration.phone.trim().to_string(),
            password_hash,
            is_verified: false,
            otp: Some(otp),
            reset_token: None,
            role: Role::Member,
            company: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Consumes a pending OTP and marks the account verified.
    pub fn verify_otp(&mut self, candidate: &str, now: Timestamp) -> Result<(), AccountError> {
        let valid = self
            .otp
            .as_ref()
            .map(|otp| otp.matches(candidate, &now))
            .unwrap_or(false);
        if !valid {
            return Err(AccountError::InvalidOtp);
        }
        self.is_verified = true;
        self.otp = None;
        self.updated_at = now;
        Ok(())
    }

    /// Replaces any pending OTP with a fresh one.
    pub fn reissue_otp(&mut self, otp: OneTimeCode, now: Timestamp) {
        self.otp = Some(otp);
        self.updated_at = now;
    }

    /// Fails unless the account may sign in with a password.
    pub fn ensure_can_sign_in(&self) -> Result<(), AccountError> {
        if self.is_verified {
            Ok(())
        } else {
            Err(AccountError::NotVerified)
        }
    }

    /// Stores a reset token, replacing any earlier one.
    pub fn begin_password_reset(&mut self, token: ResetToken, now: Timestamp) {
        self.reset_token = Some(token);
        self.updated_at = now;
    }

    /// True when `plain` is this account's live reset token.
    pub fn has_live_reset_token(&self, plain: &str, now: &Timestamp) -> bool {
        match &self.reset_token {
            Some(token) => token.token_hash == ResetToken::digest(plain) && token.is_live(now),
            None => false,
        }
    }

    /// Sets a new password hash and consumes the reset token.
    pub fn complete_password_reset(
        &mut self,
        plain: &str,
        new_hash: String,
        now: Timestamp,
    ) -> Result<(), AccountError> {
        if !self.has_live_reset_token(plain, &now) {
            return Err(AccountError::InvalidResetToken);
        }
        self.password_hash = new_hash;
        self.reset_token = None;
        self.updated_at = now;
        Ok(())
    }

    pub fn update_company(&mut self, company: CompanyProfile, now: Timestamp) {
        self.company = Some(company);
        self.updated_at = now;
    }

    /// Session view of this account.
    pub fn to_session(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            email: self.email.clone(),
            name: self.fullname.clone(),
            role: self.role,
            company: self.company.clone(),
        }
    }
}
