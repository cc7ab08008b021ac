//! Route access guard.
//!
//! A pure, synchronous decision evaluated on every navigation: visitors
//! without a session go to the login page, authenticated visitors on a
//! route for the other role bounce to their own home, everything else
//! renders. No loops, no retries.

use crate::auth::{Role, RoleKind};

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_HOME: &str = "/admin";
pub const DIVISI_HOME: &str = "/divisi";

impl RoleKind {
    /// Canonical landing page for a role.
    pub fn home_path(self) -> &'static str {
        match self {
            RoleKind::Admin => ADMIN_HOME,
            RoleKind::Divisi => DIVISI_HOME,
        }
    }
}

/// What a route demands of the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Requires(RoleKind),
}

/// Outcome of evaluating a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Allow,
    RedirectToLogin,
    Redirect(&'static str),
}

/// Evaluates a single navigation attempt.
pub fn evaluate(access: RouteAccess, role: &Role) -> RouteOutcome {
    let Some(kind) = role.kind() else {
        return match access {
            RouteAccess::Public => RouteOutcome::Allow,
            RouteAccess::Requires(_) => RouteOutcome::RedirectToLogin,
        };
    };

    match access {
        RouteAccess::Public => RouteOutcome::Allow,
        RouteAccess::Requires(required) if required == kind => RouteOutcome::Allow,
        RouteAccess::Requires(_) => RouteOutcome::Redirect(kind.home_path()),
    }
}

/// Where a visit to the login page lands: authenticated visitors bounce to
/// their role's home, everyone else stays.
pub fn login_landing(role: &Role) -> &'static str {
    match role.kind() {
        Some(kind) => kind.home_path(),
        None => LOGIN_PATH,
    }
}
