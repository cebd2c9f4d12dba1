//! Generic HTTP client for the remote billing API.
//!
//! Provides:
//! - [`ApiClient`]: reqwest wrapper that attaches the stored bearer token
//!   to every request and decodes JSON responses
//! - [`ApiError`]: the client-side error taxonomy (transport, rejected
//!   authorization, API error with message body, malformed body)
//! - [`types`]: typed serde bindings for the wire contract
//!
//! ## Design
//! - The API owns all business logic; nothing here computes billing amounts.
//! - Error bodies are either `{"message": "..."}` JSON or plain text; both
//!   are normalized into a human-readable message.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};

/// Extract a human-readable message from an API error body.
///
/// Accepts the two body shapes the backend produces: a JSON object with a
/// `message` field, or a bare text body. Returns `None` when neither yields
/// a non-empty message.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if let Some(message) = value.as_str() {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        return None;
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ── Tests ───────────────────────────────────────────────────────────
