//! Client-side session state for the billing portal.
//!
//! Provides:
//! - Normalized authenticated identity with a closed role enum
//! - File-backed session store (serialized identity + raw bearer token)
//! - Corruption-safe startup: malformed persisted state loads as "no session"
//!
//! ## Design Decisions
//! - The role is normalized exactly once, at the API boundary. An unknown or
//!   missing role never enters the store; unrecognized roles are always
//!   treated as unauthorized rather than falling back to a customer default.
//! - Single writer (the auth gateway), many readers. The in-memory cache is
//!   an `RwLock` and writes are whole-value replacements.

pub mod identity;
pub mod store;

pub use identity::{Identity, Role};
pub use store::SessionStore;
