//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BIZPORTAL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use bizportal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod auth;
mod database;
mod email;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::{DatabaseConfig, StorageBackend};
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, static frontend)
    #[serde(default)]
    pub server: ServerConfig,

    /// Store selection and PostgreSQL connection
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Session tokens, OTP and reset token lifetimes
    pub auth: AuthConfig,

    /// Email delivery (Resend)
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BIZPORTAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BIZPORTAL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BIZPORTAL__AUTH__SESSION_SECRET=...` -> `auth.session_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BIZPORTAL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.email.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn set_minimal_env() {
        env::set_var("BIZPORTAL__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("BIZPORTAL__AUTH__SESSION_SECRET", SECRET);
    }

    fn clear_env() {
        for key in [
            "BIZPORTAL__DATABASE__URL",
            "BIZPORTAL__DATABASE__BACKEND",
            "BIZPORTAL__AUTH__SESSION_SECRET",
            "BIZPORTAL__AUTH__OTP_TTL_SECS",
            "BIZPORTAL__EMAIL__RESEND_API_KEY",
            "BIZPORTAL__SERVER__PORT",
            "BIZPORTAL__SERVER__ENVIRONMENT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.database.backend, StorageBackend::Postgres);
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_session_secret_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BIZPORTAL__DATABASE__URL", "postgresql://test@localhost/test");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.auth.cookie_name, "session_token");
        assert!(!config.email.delivery_enabled());
    }

    #[test]
    fn test_memory_backend_and_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BIZPORTAL__AUTH__SESSION_SECRET", SECRET);
        env::set_var("BIZPORTAL__DATABASE__BACKEND", "memory");
        env::set_var("BIZPORTAL__AUTH__OTP_TTL_SECS", "120");
        env::set_var("BIZPORTAL__SERVER__ENVIRONMENT", "production");
        env::set_var("BIZPORTAL__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.database.is_memory());
        assert_eq!(config.auth.otp_ttl_secs, 120);
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_email_key_enables_delivery() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BIZPORTAL__EMAIL__RESEND_API_KEY", "re_test");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().email.delivery_enabled());
    }
}
