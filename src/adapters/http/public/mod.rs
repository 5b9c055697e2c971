//! HTTP adapter for the public site.
//!
//! - `GET /api/packages`, `GET /api/packages/:id`, `GET /api/payment-methods`
//! - `POST /api/transactions` (guest or member), `GET /api/transactions/:id`
//! - `GET /api/blog`, `GET /api/blog/:slug`
//! - `POST /api/contact`
//! - `GET /api/health`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::public_routes;
