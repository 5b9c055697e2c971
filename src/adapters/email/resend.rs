//! Resend HTTP API adapter for the `EmailSender` port.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::ports::{EmailError, EmailSender, OutboundEmail};

const DEFAULT_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Sends mail through `POST /emails` on the Resend API.
pub struct ResendEmailSender {
    api_key: Secret<String>,
    from: String,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl ResendEmailSender {
    /// `from` is a full header value, e.g. `Bizportal <noreply@example.com>`.
    pub fn new(api_key: Secret<String>, from: impl Into<String>) -> Result<Self, EmailError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EmailError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            from: from.into(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Resend request failed");
                EmailError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %error_text, "Resend rejected email");
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body: error_text,
            });
        }

        tracing::info!(subject = %email.subject, "email sent via Resend");
        Ok(())
    }
}

impl std::fmt::Debug for ResendEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendEmailSender")
            .field("from", &self.from)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}
