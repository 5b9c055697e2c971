//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - resolves the caller from the session cookie or a
//!   Bearer token and injects `AuthenticatedUser` into extensions
//! - `RequireAuth` / `RequireAdmin` / `OptionalAuth` - extractors over it
//!
//! ```text
//! Request → session_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! A bad cookie is treated as anonymous (the browser keeps sending stale
//! cookies after expiry). A bad Bearer token is rejected with 401.

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Where the presented credential came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Credential {
    Bearer(String),
    Cookie(String),
}

fn credential(request: &Request, cookie_name: &str) -> Option<Credential> {
    let bearer = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(Credential::Bearer(token.to_string()));
    }

    CookieJar::from_headers(request.headers())
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .map(Credential::Cookie)
}

/// Validates the caller's session, if any.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match credential(&request, &state.settings.cookie_name) {
        Some(Credential::Bearer(token)) => match state.session_validator.validate(&token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                if let AuthError::ServiceUnavailable(msg) = &e {
                    tracing::error!("session service unavailable: {}", msg);
                }
                return ApiError::from(e).into_response();
            }
        },
        Some(Credential::Cookie(token)) => match state.session_validator.validate(&token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid session cookie");
            }
        },
        None => {}
    }
    next.run(request).await
}

/// Extractor that requires a session.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// Extractor that requires an admin session.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireAuth(user) = RequireAuth::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::info!(user_id = %user.id, "admin endpoint refused");
            return Err(ApiError::forbidden("Admin access required"));
        }
        Ok(RequireAdmin(user))
    }
}

/// Extractor for optional authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}
