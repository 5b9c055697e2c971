//! HTTP adapter - axum routes over the application layer.
//!
//! ```text
//! /api/auth/*        credentials and session
//! /api/user/*        account administration, company profile
//! /api/webmaster/*   back-office resources (admin only)
//! /api/*             public catalog, checkout, blog, contact
//! everything else    route guard, then the static frontend
//! ```
//!
//! Every JSON response uses the `{status, statusCode, message, data}`
//! envelope from [`error`].

pub mod auth;
pub mod error;
pub mod middleware;
pub mod public;
pub mod router;
pub mod state;
pub mod users;
pub mod webmaster;

pub use error::{ApiError, ApiJson, ApiSuccess};
pub use router::{api_routes, build_router};
pub use state::{AppState, HttpSettings, Stores};
