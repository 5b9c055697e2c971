//! Email configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend). Without an API key, mail is only logged.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: Option<Secret<String>>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Recipient of contact form notifications
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Public URL of the site, used to build password reset links
    #[serde(default = "default_app_base_url")]
    pub app_base_url: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// True when mail should go through Resend rather than the log.
    pub fn delivery_enabled(&self) -> bool {
        self.resend_api_key.is_some()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.app_base_url.trim_end_matches('/')
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.resend_api_key {
            if !key.expose_secret().starts_with("re_") {
                return Err(ValidationError::InvalidResendKey);
            }
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.admin_email.contains('@') {
            return Err(ValidationError::InvalidAdminEmail);
        }
        if !self.app_base_url.starts_with("http://") && !self.app_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidAppBaseUrl);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            admin_email: default_admin_email(),
            app_base_url: default_app_base_url(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@bizportal.local".to_string()
}

fn default_from_name() -> String {
    "Bizportal".to_string()
}

fn default_admin_email() -> String {
    "admin@bizportal.local".to_string()
}

fn default_app_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.from_email, "noreply@bizportal.local");
        assert_eq!(config.from_name, "Bizportal");
        assert!(!config.delivery_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_header() {
        let config = EmailConfig {
            from_email: "support@example.com".to_string(),
            from_name: "Support Team".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Support Team <support@example.com>");
    }

    #[test]
    fn test_base_url_trims_slash() {
        let config = EmailConfig {
            app_base_url: "https://portal.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://portal.example.com");
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        let config = EmailConfig {
            resend_api_key: Some(Secret::new("sk_xxx".to_string())),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidResendKey)));
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = EmailConfig {
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_relative_base_url() {
        let config = EmailConfig {
            app_base_url: "portal.example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidAppBaseUrl)));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = EmailConfig {
            resend_api_key: Some(Secret::new("re_abcd1234".to_string())),
            ..Default::default()
        };
        assert!(config.delivery_enabled());
        assert!(config.validate().is_ok());
    }
}
