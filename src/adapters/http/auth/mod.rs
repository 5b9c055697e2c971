//! HTTP adapter for credential endpoints.
//!
//! - `POST /api/auth/register` - create an unverified account, mail an OTP
//! - `POST /api/auth/verify-otp` - verify the email and sign in
//! - `POST /api/auth/resend-otp` - mail a fresh OTP
//! - `POST /api/auth/login` / `POST /api/auth/logout`
//! - `GET /api/auth/session` - current session claims
//! - `POST /api/auth/forgot-password`, `validate-reset-token`, `reset-password`
//!
//! `update_company` lives here too because it re-issues the session cookie;
//! it is mounted under `/api/user`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
