//! HTTP adapter for the account directory.
//!
//! - `GET /api/user` - list accounts (admin)
//! - `DELETE /api/user` - delete by email (admin)
//! - `POST /api/user/update-company` - attach a company profile (session)

pub mod handlers;
pub mod routes;

pub use routes::user_routes;
