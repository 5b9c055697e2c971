//! HTTP adapter for the admin console: clients, catalog, transactions, blog.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::webmaster_routes;
