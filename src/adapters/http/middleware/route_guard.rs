//! Page guard - applies the access rules to non-API page requests.

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::access::{decide, GuardDecision, Principal};
use crate::domain::foundation::AuthenticatedUser;

/// Must run after `session_middleware` so the caller is known.
pub async fn route_guard(request: Request, next: Next) -> Response {
    let principal = Principal::from_session(request.extensions().get::<AuthenticatedUser>());
    let path = request.uri().path().to_string();

    match decide(&path, principal) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(path = %path, target = %target, "page request redirected");
            (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, target)]).into_response()
        }
    }
}
