//! gridport: terminal portal client for an electricity-utility billing API.
//!
//! The binary is a thin shell over four layers:
//! - [`session`]: who is logged in, persisted across runs
//! - [`auth`]: credential exchange with the remote API, sole session writer
//! - [`routes`]: role-gated navigation decisions
//! - [`portal`]: typed view bindings over the generic [`api`] client
//!
//! All billing logic (tariff math, payment processing, PDF/QR generation)
//! lives server-side; this crate only binds forms to REST calls and renders
//! the results.

pub mod api;
pub mod auth;
pub mod config;
pub mod portal;
pub mod routes;
pub mod session;
