//! Who is asking, as far as the route guard cares.

use crate::domain::foundation::{AuthenticatedUser, Role};

/// Caller classification used by the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principal {
    Anonymous,
    Member,
    Admin,
    /// Signed in, but with a role the portal does not know.
    Unrecognized,
}

impl Principal {
    /// Classifies an optional session.
    pub fn from_session(user: Option<&AuthenticatedUser>) -> Self {
        match user.map(|u| u.role) {
            None => Principal::Anonymous,
            Some(Role::Member) => Principal::Member,
            Some(Role::Admin) => Principal::Admin,
            Some(Role::Unknown) => Principal::Unrecognized,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !matches!(self, Principal::Anonymous)
    }

    /// Landing page for a signed-in caller.
    pub fn home(&self) -> &'static str {
        match self {
            Principal::Admin => super::ADMIN_HOME,
            _ => super::MEMBER_HOME,
        }
    }
}
