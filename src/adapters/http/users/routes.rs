//! Axum router configuration for `/api/user`.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{delete_user, list_users};
use crate::adapters::http::auth::handlers::update_company;
use crate::adapters::http::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).delete(delete_user))
        .route("/update-company", post(update_company))
}
