//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryBlogPostRepository, InMemoryPackageRepository, InMemoryPaymentMethodRepository,
    InMemoryTransactionRepository, InMemoryUserRepository,
};
use crate::application::handlers::{
    CheckoutHandler, ForgotPasswordHandler, GetPaymentInstructionHandler, LoginHandler,
    RegisterHandler, ResendOtpHandler, ResetPasswordHandler, SubmitContactHandler,
    UpdateCompanyHandler, UpdateTransactionStatusHandler, ValidateResetTokenHandler,
    VerifyOtpHandler,
};
use crate::application::services::{
    BlogService, PackageService, PaymentMethodService, TransactionService, UserDirectory,
};
use crate::config::AppConfig;
use crate::ports::{
    BlogPostRepository, EmailSender, PackageRepository, PasswordHasher, PaymentMethodRepository,
    SessionIssuer, SessionValidator, TransactionRepository, UserRepository,
};

/// HTTP-facing settings derived from configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cookie_name: String,
    pub secure_cookies: bool,
    pub otp_ttl_secs: u64,
    pub reset_token_ttl_secs: u64,
    pub app_base_url: String,
    pub admin_email: String,
}

impl HttpSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            cookie_name: config.auth.cookie_name.clone(),
            secure_cookies: config.is_production(),
            otp_ttl_secs: config.auth.otp_ttl_secs,
            reset_token_ttl_secs: config.auth.reset_token_ttl_secs,
            app_base_url: config.email.base_url().to_string(),
            admin_email: config.email.admin_email.clone(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cookie_name: "session_token".to_string(),
            secure_cookies: false,
            otp_ttl_secs: crate::domain::user::DEFAULT_OTP_TTL_SECS,
            reset_token_ttl_secs: crate::domain::user::DEFAULT_RESET_TOKEN_TTL_SECS,
            app_base_url: "http://localhost:3000".to_string(),
            admin_email: "admin@bizportal.local".to_string(),
        }
    }
}

/// The five document collections.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserRepository>,
    pub packages: Arc<dyn PackageRepository>,
    pub payment_methods: Arc<dyn PaymentMethodRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub blog_posts: Arc<dyn BlogPostRepository>,
}

impl Stores {
    /// Fresh, empty in-memory collections.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            packages: Arc::new(InMemoryPackageRepository::new()),
            payment_methods: Arc::new(InMemoryPaymentMethodRepository::new()),
            transactions: Arc::new(InMemoryTransactionRepository::new()),
            blog_posts: Arc::new(InMemoryBlogPostRepository::new()),
        }
    }
}

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub packages: Arc<dyn PackageRepository>,
    pub payment_methods: Arc<dyn PaymentMethodRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub blog_posts: Arc<dyn BlogPostRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub session_issuer: Arc<dyn SessionIssuer>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub email_sender: Arc<dyn EmailSender>,
    pub settings: Arc<HttpSettings>,
}

impl AppState {
    pub fn new(
        stores: Stores,
        password_hasher: Arc<dyn PasswordHasher>,
        session_issuer: Arc<dyn SessionIssuer>,
        session_validator: Arc<dyn SessionValidator>,
        email_sender: Arc<dyn EmailSender>,
        settings: HttpSettings,
    ) -> Self {
        Self {
            users: stores.users,
            packages: stores.packages,
            payment_methods: stores.payment_methods,
            transactions: stores.transactions,
            blog_posts: stores.blog_posts,
            password_hasher,
            session_issuer,
            session_validator,
            email_sender,
            settings: Arc::new(settings),
        }
    }

    // Credential handlers

    pub fn register_handler(&self) -> RegisterHandler {
        RegisterHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.email_sender.clone(),
            self.settings.otp_ttl_secs,
        )
    }

    pub fn verify_otp_handler(&self) -> VerifyOtpHandler {
        VerifyOtpHandler::new(self.users.clone(), self.session_issuer.clone())
    }

    pub fn resend_otp_handler(&self) -> ResendOtpHandler {
        ResendOtpHandler::new(
            self.users.clone(),
            self.email_sender.clone(),
            self.settings.otp_ttl_secs,
        )
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.session_issuer.clone(),
        )
    }

    pub fn forgot_password_handler(&self) -> ForgotPasswordHandler {
        ForgotPasswordHandler::new(
            self.users.clone(),
            self.email_sender.clone(),
            self.settings.app_base_url.clone(),
            self.settings.reset_token_ttl_secs,
        )
    }

    pub fn validate_reset_token_handler(&self) -> ValidateResetTokenHandler {
        ValidateResetTokenHandler::new(self.users.clone())
    }

    pub fn reset_password_handler(&self) -> ResetPasswordHandler {
        ResetPasswordHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn update_company_handler(&self) -> UpdateCompanyHandler {
        UpdateCompanyHandler::new(self.users.clone(), self.session_issuer.clone())
    }

    // Transactions

    pub fn checkout_handler(&self) -> CheckoutHandler {
        CheckoutHandler::new(
            self.packages.clone(),
            self.payment_methods.clone(),
            self.transactions.clone(),
        )
    }

    pub fn update_transaction_status_handler(&self) -> UpdateTransactionStatusHandler {
        UpdateTransactionStatusHandler::new(self.transactions.clone())
    }

    pub fn payment_instruction_handler(&self) -> GetPaymentInstructionHandler {
        GetPaymentInstructionHandler::new(self.transactions.clone(), self.payment_methods.clone())
    }

    // Contact

    pub fn contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.email_sender.clone(), self.settings.admin_email.clone())
    }

    // Resource services

    pub fn package_service(&self) -> PackageService {
        PackageService::new(self.packages.clone())
    }

    pub fn payment_method_service(&self) -> PaymentMethodService {
        PaymentMethodService::new(self.payment_methods.clone())
    }

    pub fn transaction_service(&self) -> TransactionService {
        TransactionService::new(self.transactions.clone())
    }

    pub fn blog_service(&self) -> BlogService {
        BlogService::new(self.blog_posts.clone())
    }

    pub fn user_directory(&self) -> UserDirectory {
        UserDirectory::new(self.users.clone())
    }
}
