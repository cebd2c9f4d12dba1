//! Credential exchange with the remote billing API.
//!
//! Provides:
//! - Login and registration against `/auth/login` and `/auth/register`
//! - Identity normalization (role parsed once, at this boundary)
//! - Token + identity bootstrap into the session store
//! - Synchronous, network-free logout
//!
//! ## Design Decisions
//! - The gateway is the only writer of the session store; every other
//!   component reads.
//! - No failure crosses the gateway boundary as an error: transport
//!   failures, rejected credentials, and unrecognized roles all become an
//!   [`AuthOutcome::Rejected`] with a human-readable message.
//! - Registration auto-authenticates: a successful signup performs the
//!   same token/identity bootstrap as a login.

pub mod gateway;

pub use gateway::{AuthGateway, AuthOutcome};
