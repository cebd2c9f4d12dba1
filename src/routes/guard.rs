//! Route authorization: the decision function and the static route table.

use crate::session::{Identity, Role};

/// Login entry point; where anonymous navigation lands.
pub const LOGIN_PATH: &str = "/login";

/// A route's declared allowed-role set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No role requirement; any session state may render.
    Open,
    /// Only the listed roles may render.
    Restricted(&'static [Role]),
}

/// Verdict for one navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Render the destination.
    Render,
    /// Session is still initializing; show an interim placeholder.
    Checking,
    /// No identity; go to the login entry point.
    RedirectLogin,
    /// Identity present but not allowed here; go to its own landing.
    RedirectLanding(Role),
}

/// The session state the guard decides over.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// True while the store is still being read at startup.
    pub pending: bool,
    pub identity: Option<Identity>,
}

/// Decide whether to render `access`-gated content for this session.
pub fn authorize(session: &SessionSnapshot, access: RouteAccess) -> RouteDecision {
    if session.pending {
        return RouteDecision::Checking;
    }

    let Some(identity) = &session.identity else {
        return RouteDecision::RedirectLogin;
    };

    match access {
        RouteAccess::Open => RouteDecision::Render,
        RouteAccess::Restricted(allowed) => {
            if allowed.contains(&identity.role) {
                RouteDecision::Render
            } else {
                RouteDecision::RedirectLanding(identity.role)
            }
        }
    }
}

/// Default landing screen for a role.
pub fn landing_for(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Customer => "/customer/dashboard",
    }
}

/// One protected or public screen.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub access: RouteAccess,
}

const ADMIN_ONLY: RouteAccess = RouteAccess::Restricted(&[Role::Admin]);
const CUSTOMER_ONLY: RouteAccess = RouteAccess::Restricted(&[Role::Customer]);

/// Static route table mirroring the portal's screen tree.
pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/login", access: RouteAccess::Open },
    RouteDef { path: "/signup", access: RouteAccess::Open },
    RouteDef { path: "/admin/dashboard", access: ADMIN_ONLY },
    RouteDef { path: "/admin/customers", access: ADMIN_ONLY },
    RouteDef { path: "/admin/accounts", access: ADMIN_ONLY },
    RouteDef { path: "/admin/readings", access: ADMIN_ONLY },
    RouteDef { path: "/admin/bills", access: ADMIN_ONLY },
    RouteDef { path: "/admin/tariffs", access: ADMIN_ONLY },
    RouteDef { path: "/admin/users", access: ADMIN_ONLY },
    RouteDef { path: "/admin/complaints", access: ADMIN_ONLY },
    RouteDef { path: "/customer/dashboard", access: CUSTOMER_ONLY },
    RouteDef { path: "/customer/bills", access: CUSTOMER_ONLY },
    RouteDef { path: "/customer/pay", access: CUSTOMER_ONLY },
    RouteDef { path: "/customer/advance-payment", access: CUSTOMER_ONLY },
    RouteDef { path: "/customer/usage", access: CUSTOMER_ONLY },
    RouteDef { path: "/customer/complaints", access: CUSTOMER_ONLY },
];

/// Look up a route by path. Unknown paths resolve to no route; callers
/// treat that as the login entry point.
pub fn lookup(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.path == path)
}

// ── Tests ───────────────────────────────────────────────────────────
