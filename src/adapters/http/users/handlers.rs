//! HTTP handlers for the account directory (`/api/user`).

use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::adapters::http::error::{ApiError, ApiJson, ApiSuccess};
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::state::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteUserRequest {
    pub email: String,
}

/// GET /api/user
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_directory().list_users().await?;
    Ok(ApiSuccess::ok("Success retrieve user data", users))
}

/// DELETE /api/user
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(req): ApiJson<DeleteUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.email.trim().is_empty() {
        return Err(ApiError::bad_request("email is required"));
    }
    state.user_directory().delete_by_email(&req.email).await?;
    tracing::info!(admin_id = %admin.id, "user removed");
    Ok(ApiSuccess::message("User deleted successfully"))
}
