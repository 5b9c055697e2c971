//! Top-level router: API tree, page guard and the frontend fallback.

use std::path::Path;

use axum::{middleware, Router};
use tower_http::services::ServeDir;

use super::auth::auth_routes;
use super::error::ApiError;
use super::middleware::{route_guard, session_middleware};
use super::public::public_routes;
use super::state::AppState;
use super::users::user_routes;
use super::webmaster::webmaster_routes;
use crate::domain::foundation::ErrorCode;

async fn not_found() -> ApiError {
    ApiError::not_found(ErrorCode::RouteNotFound, "Not found")
}

/// Every JSON endpoint, relative to `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/user", user_routes())
        .nest("/webmaster", webmaster_routes())
        .merge(public_routes())
}

/// Builds the application router.
///
/// Page requests outside `/api` pass the route guard and are then served
/// from `static_dir` when one is configured; otherwise they get a JSON 404.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new().nest("/api", api_routes().fallback(not_found));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_found),
    };

    router
        .layer(middleware::from_fn(route_guard))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::adapters::auth::{MockPasswordHasher, MockSessionValidator};
    use crate::adapters::email::RecordingEmailSender;
    use crate::adapters::http::state::{HttpSettings, Stores};
    use crate::domain::foundation::Role;

    fn app(static_dir: Option<&Path>) -> Router {
        let sessions = Arc::new(
            MockSessionValidator::new()
                .with_test_user("member", Role::Member)
                .with_test_user("admin", Role::Admin),
        );
        let state = AppState::new(
            Stores::in_memory(),
            Arc::new(MockPasswordHasher::new()),
            sessions.clone(),
            sessions,
            Arc::new(RecordingEmailSender::new()),
            HttpSettings::default(),
        );
        build_router(state, static_dir)
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // API tree
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn health_is_public() {
        let response = app(None).oneshot(get("/api/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let response = app(None).oneshot(get("/api/nope", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["status"], false);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn webmaster_api_rejects_members() {
        let response = app(None)
            .oneshot(get("/api/webmaster/clients", Some("member")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn webmaster_api_admits_admins() {
        let response = app(None)
            .oneshot(get("/api/webmaster/clients", Some("admin")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_bearer_is_unauthorized() {
        let response = app(None)
            .oneshot(get("/api/auth/session", Some("forged")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Pages
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn anonymous_dashboard_redirects_to_login() {
        let response = app(None).oneshot(get("/dashboard", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/auth/login");
    }

    #[tokio::test]
    async fn member_cannot_open_admin_area() {
        let response = app(None)
            .oneshot(get("/admin/webmaster/packages", Some("member")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/unauthorized");
    }

    #[tokio::test]
    async fn allowed_page_without_frontend_is_json_404() {
        let response = app(None).oneshot(get("/about", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["status"], false);
    }

    #[tokio::test]
    async fn allowed_page_is_served_from_frontend_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("about.html"), "<h1>About</h1>").unwrap();

        let response = app(Some(dir.path()))
            .oneshot(get("/about.html", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
