//! Per-feature view bindings over the generic API client.
//!
//! Each operation is a thin fetch/submit wrapper, the screen-level
//! equivalent of the portal's pages, split by role the same way the
//! route table is. No business logic lives here.

pub mod admin;
pub mod customer;

pub use admin::AdminPortal;
pub use customer::CustomerPortal;
