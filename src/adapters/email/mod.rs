//! Email adapters - `EmailSender` implementations and message templates.
//!
//! - `ResendEmailSender` - production delivery via the Resend HTTP API
//! - `LoggingEmailSender` - development fallback when no API key is set
//! - `RecordingEmailSender` - captures messages for tests

mod logging;
mod resend;
pub mod templates;

pub use logging::{LoggingEmailSender, RecordingEmailSender};
pub use resend::ResendEmailSender;
