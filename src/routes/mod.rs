//! Role-gated navigation for the portal.
//!
//! The guard is a pure function of (session state, route's declared roles):
//! it renders, redirects to the login entry point, or redirects to the
//! landing screen of the identity's own role. No side effects.

pub mod guard;

pub use guard::{authorize, landing_for, lookup, RouteAccess, RouteDecision, SessionSnapshot};
