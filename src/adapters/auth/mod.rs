//! Authentication adapters.
//!
//! Implementations of the `SessionIssuer`, `SessionValidator` and
//! `PasswordHasher` ports:
//!
//! - `jwt` - HS256 session tokens signed with the configured secret
//! - `argon` - Argon2id password hashing
//! - `mock` - Test implementations with no crypto

mod argon;
mod jwt;
mod mock;

pub use argon::Argon2PasswordHasher;
pub use jwt::JwtSessionService;
pub use mock::{MockPasswordHasher, MockSessionValidator};
