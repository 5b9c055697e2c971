//! Axum router configuration for credential endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    forgot_password, login, logout, register, resend_otp, reset_password, session,
    validate_reset_token, verify_otp,
};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/verify-otp", post(verify_otp))
        .route("/resend-otp", post(resend_otp))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/forgot-password", post(forgot_password))
        .route("/validate-reset-token", post(validate_reset_token))
        .route("/reset-password", post(reset_password))
}
