//! HTTP middleware for axum.
//!
//! - `auth` - session resolution and extractors
//! - `route_guard` - page access redirects

pub mod auth;
pub mod route_guard;

pub use auth::{session_middleware, OptionalAuth, RequireAdmin, RequireAuth};
pub use route_guard::route_guard;
