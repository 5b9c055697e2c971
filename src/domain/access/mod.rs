//! Access module - page-level route guard.
//!
//! A pure decision over (principal, path). The HTTP layer turns a
//! `GuardDecision::Redirect` into a temporary redirect.

mod guard;
mod principal;

pub use guard::{decide, is_exempt, login_with_callback, GuardDecision};
pub use principal::Principal;

/// First-segment prefixes the guard never inspects.
pub const EXEMPT_PREFIXES: [&str; 8] = [
    "api",
    "_next/static",
    "_next/image",
    "favicon.ico",
    "public",
    "login",
    "register",
    "unauthorized",
];

/// Pages that signed-in users are bounced away from.
pub const AUTH_PAGES: [&str; 2] = ["/auth/login", "/auth/register"];

/// Prefixes that require a session.
pub const PROTECTED_PREFIXES: [&str; 5] = [
    "/dashboard",
    "/admin",
    "/admin/dashboard",
    "/admin/webmaster",
    "/member",
];

pub const LOGIN_PAGE: &str = "/auth/login";
pub const UNAUTHORIZED_PAGE: &str = "/unauthorized";
pub const DASHBOARD_ENTRY: &str = "/dashboard";
pub const ADMIN_ENTRY: &str = "/admin";
pub const ADMIN_AREA: &str = "/admin/webmaster";
pub const MEMBER_AREA: &str = "/admin/dashboard";
pub const ADMIN_HOME: &str = ADMIN_AREA;
pub const MEMBER_HOME: &str = MEMBER_AREA;
