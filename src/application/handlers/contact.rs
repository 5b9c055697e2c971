//! SubmitContactHandler - Relays a contact form message by email.

use std::sync::Arc;

use crate::adapters::email::templates;
use crate::domain::contact::ContactMessage;
use crate::domain::foundation::DomainError;
use crate::ports::EmailSender;

pub struct SubmitContactHandler {
    mailer: Arc<dyn EmailSender>,
    admin_email: String,
}

impl SubmitContactHandler {
    pub fn new(mailer: Arc<dyn EmailSender>, admin_email: impl Into<String>) -> Self {
        Self {
            mailer,
            admin_email: admin_email.into(),
        }
    }

    /// Notifies the administrator, then confirms receipt to the sender.
    /// Nothing is stored.
    pub async fn handle(&self, message: ContactMessage) -> Result<(), DomainError> {
        message.validate()?;

        let notification = templates::contact_notification_email(&self.admin_email, &message);
        self.mailer.send(&notification).await.map_err(|e| {
            tracing::error!(error = %e, "failed to notify admin of contact message");
            DomainError::from(e)
        })?;

        let confirmation = templates::contact_confirmation_email(&message);
        self.mailer.send(&confirmation).await.map_err(|e| {
            tracing::error!(error = %e, "failed to confirm contact message");
            DomainError::from(e)
        })?;

        tracing::info!("contact message relayed");
        Ok(())
    }
}
