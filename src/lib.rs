//! Bizportal - Business management backend.
//!
//! Serves the public site (subscription packages, checkout, blog, contact)
//! and the webmaster back office (clients, catalog, transactions, content)
//! behind email/OTP accounts with admin and member roles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use adapters::http::{build_router, AppState};
use config::ServerConfig;

/// Full application: routes plus the cross-cutting tower layers.
pub fn build_app(state: AppState, server: &ServerConfig) -> Router {
    build_router(state, server.static_dir.as_deref())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    // Same-origin only when nothing is configured.
    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
