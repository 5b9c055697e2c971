//! Email senders that never leave the process.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{EmailError, EmailSender, OutboundEmail};

/// Logs each message instead of sending it. Used when no API key is configured.
#[derive(Debug, Default, Clone)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.html,
            "email delivery disabled; logging message"
        );
        Ok(())
    }
}

/// Records messages for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Last message addressed to `to`.
    pub fn last_to(&self, to: &str) -> Option<OutboundEmail> {
        self.sent().into_iter().rev().find(|m| m.to == to)
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Transport("recording sender set to fail".to_string()));
        }
        self.sent
            .lock()
            .map_err(|_| EmailError::Transport("recording sender poisoned".to_string()))?
            .push(email.clone());
        Ok(())
    }
}
