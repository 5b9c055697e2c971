//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - session tokens and password hashing
//! - `email` - transactional mail (Resend, logging, recording)
//! - `http` - axum routes, middleware and response envelope
//! - `memory` - in-process repositories for development and tests
//! - `postgres` - sqlx repositories

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
