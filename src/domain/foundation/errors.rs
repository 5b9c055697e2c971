//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a minimum-length validation error.
    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidAction,

    // Not found errors
    UserNotFound,
    PackageNotFound,
    PaymentMethodNotFound,
    TransactionNotFound,
    BlogPostNotFound,
    RouteNotFound,

    // Account errors
    EmailAlreadyRegistered,
    InvalidCredentials,
    EmailNotVerified,
    InvalidOtp,
    InvalidResetToken,
    PaymentMethodInactive,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    EmailDeliveryFailed,
    StoreNotReady,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Returns true for the "resource does not exist" family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::UserNotFound
                | ErrorCode::PackageNotFound
                | ErrorCode::PaymentMethodNotFound
                | ErrorCode::TransactionNotFound
                | ErrorCode::BlogPostNotFound
                | ErrorCode::RouteNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidAction => "INVALID_ACTION",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::PackageNotFound => "PACKAGE_NOT_FOUND",
            ErrorCode::PaymentMethodNotFound => "PAYMENT_METHOD_NOT_FOUND",
            ErrorCode::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            ErrorCode::BlogPostNotFound => "BLOG_POST_NOT_FOUND",
            ErrorCode::RouteNotFound => "NOT_FOUND",
            ErrorCode::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            ErrorCode::InvalidOtp => "INVALID_OTP",
            ErrorCode::InvalidResetToken => "INVALID_RESET_TOKEN",
            ErrorCode::PaymentMethodInactive => "PAYMENT_METHOD_INACTIVE",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::EmailDeliveryFailed => "EMAIL_DELIVERY_FAILED",
            ErrorCode::StoreNotReady => "STORE_NOT_READY",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a database error from any displayable cause.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::validation(field, err.to_string())
    }
}
