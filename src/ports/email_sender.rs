//! Outbound email port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum EmailError {
    /// Provider could not be reached.
    #[error("Email transport failed: {0}")]
    Transport(String),

    /// Provider answered with a non-success status.
    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<EmailError> for DomainError {
    fn from(err: EmailError) -> Self {
        DomainError::new(ErrorCode::EmailDeliveryFailed, "Failed to send email")
            .with_detail("cause", err.to_string())
    }
}

/// Delivers transactional email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError>;
}
