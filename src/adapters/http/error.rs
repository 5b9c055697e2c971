//! Response envelopes and the API error type.
//!
//! Every JSON response carries the same outer shape:
//!
//! ```text
//! success: {"status": true,  "statusCode": 200, "message": "...", "data": ...}
//! failure: {"status": false, "statusCode": 404, "code": "...", "message": "..."}
//! ```

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Success envelope
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuccessBody<T: Serialize> {
    status: bool,
    status_code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

/// A successful response with an optional payload.
#[derive(Debug)]
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    message: String,
    data: Option<T>,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, data)
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiSuccess<()> {
    /// 200 with no `data` member.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            status: true,
            status_code: self.status.as_u16(),
            message: self.message,
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error envelope
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status: bool,
    status_code: u16,
    code: String,
    message: String,
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::new(ErrorCode::ValidationFailed, message))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(DomainError::new(ErrorCode::Unauthorized, message))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self(DomainError::new(ErrorCode::Forbidden, message))
    }

    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self(DomainError::new(code, message))
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.0.code)
    }
}

/// Maps an error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidAction
        | ErrorCode::EmailAlreadyRegistered
        | ErrorCode::InvalidOtp
        | ErrorCode::InvalidResetToken
        | ErrorCode::PaymentMethodInactive => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::EmailNotVerified | ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::UserNotFound
        | ErrorCode::PackageNotFound
        | ErrorCode::PaymentMethodNotFound
        | ErrorCode::TransactionNotFound
        | ErrorCode::BlogPostNotFound
        | ErrorCode::RouteNotFound => StatusCode::NOT_FOUND,
        ErrorCode::StoreNotReady => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::EmailDeliveryFailed | ErrorCode::DatabaseError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures keep their detail in the log only.
        let message = if status.is_server_error() {
            tracing::error!(code = %self.0.code, error = %self.0, details = ?self.0.details, "request failed");
            match self.0.code {
                ErrorCode::StoreNotReady => self.0.message.clone(),
                _ => "Internal server error".to_string(),
            }
        } else {
            tracing::debug!(code = %self.0.code, message = %self.0.message, "request rejected");
            self.0.message.clone()
        };

        let body = ErrorBody {
            status: false,
            status_code: status.as_u16(),
            code: self.0.code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// JSON body extractor
// ════════════════════════════════════════════════════════════════════════════════

/// `axum::Json` whose rejection uses the error envelope.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
