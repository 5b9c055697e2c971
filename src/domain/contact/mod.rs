//! Contact module - messages submitted through the public contact form.

use serde::Deserialize;

use crate::domain::foundation::{require_email, require_text, ValidationError};

/// A message from a site visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// All fields are required; the reply address must look like an email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        require_text("subject", &self.subject)?;
        require_text("message", &self.message)?;
        require_email("email", &self.email)
    }
}
