//! Route guard decision function.
//!
//! Rules are evaluated top to bottom and the first that produces a redirect
//! wins. Requests that fall through every rule are allowed.

use super::{
    Principal, ADMIN_AREA, ADMIN_ENTRY, ADMIN_HOME, AUTH_PAGES, DASHBOARD_ENTRY, EXEMPT_PREFIXES,
    LOGIN_PAGE, MEMBER_AREA, PROTECTED_PREFIXES, UNAUTHORIZED_PAGE,
};

/// Outcome of guarding a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

impl GuardDecision {
    fn to(target: &str) -> Self {
        GuardDecision::Redirect(target.to_string())
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Redirect target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect(t) => Some(t),
        }
    }
}

/// True for paths the guard never inspects (APIs, assets, public pages).
pub fn is_exempt(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    EXEMPT_PREFIXES.iter().any(|p| rest.starts_with(p))
}

/// Decides whether `principal` may open `path`.
pub fn decide(path: &str, principal: Principal) -> GuardDecision {
    if is_exempt(path) {
        return GuardDecision::Allow;
    }

    if AUTH_PAGES.contains(&path) && principal.is_signed_in() {
        return GuardDecision::to(principal.home());
    }

    if path == DASHBOARD_ENTRY || path == ADMIN_ENTRY {
        return match principal {
            Principal::Anonymous => GuardDecision::to(LOGIN_PAGE),
            signed_in => GuardDecision::to(signed_in.home()),
        };
    }

    if path.starts_with(ADMIN_AREA) && principal != Principal::Admin {
        return GuardDecision::to(UNAUTHORIZED_PAGE);
    }

    if path.starts_with(MEMBER_AREA) {
        match principal {
            Principal::Anonymous => return GuardDecision::to(LOGIN_PAGE),
            Principal::Admin => return GuardDecision::to(ADMIN_HOME),
            Principal::Unrecognized => return GuardDecision::to(UNAUTHORIZED_PAGE),
            Principal::Member => {}
        }
    }

    let protected = PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p));
    if protected && !principal.is_signed_in() {
        return GuardDecision::Redirect(login_with_callback(path));
    }

    GuardDecision::Allow
}

/// Login URL that sends the user back to `path` after signing in.
pub fn login_with_callback(path: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("callbackUrl", path)
        .finish();
    format!("{}?{}", LOGIN_PAGE, query)
}
