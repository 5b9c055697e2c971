//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod auth;
pub mod contact;
pub mod transaction;

pub use auth::{
    ForgotPasswordCommand, ForgotPasswordHandler, LoginCommand, LoginHandler, RegisterCommand,
    RegisterHandler, RegisterResult, ResendOtpCommand, ResendOtpHandler, ResetPasswordCommand,
    ResetPasswordHandler, SignedIn, UpdateCompanyCommand, UpdateCompanyHandler,
    ValidateResetTokenHandler, ValidateResetTokenQuery, VerifyOtpCommand, VerifyOtpHandler,
};
pub use contact::SubmitContactHandler;
pub use transaction::{
    CheckoutCommand, CheckoutHandler, GetPaymentInstructionHandler, GetPaymentInstructionQuery,
    PaymentInstruction, UpdateTransactionStatusCommand, UpdateTransactionStatusHandler,
};
