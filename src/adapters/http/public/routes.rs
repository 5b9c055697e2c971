//! Axum router configuration for the public site endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    checkout, contact, get_package, get_post, health, list_packages, list_payment_methods,
    list_posts, payment_instruction,
};
use crate::adapters::http::state::AppState;

/// Routes mounted directly under `/api`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/packages", get(list_packages))
        .route("/packages/:id", get(get_package))
        .route("/payment-methods", get(list_payment_methods))
        .route("/transactions", post(checkout))
        .route("/transactions/:id", get(payment_instruction))
        .route("/blog", get(list_posts))
        .route("/blog/:slug", get(get_post))
        .route("/contact", post(contact))
}
