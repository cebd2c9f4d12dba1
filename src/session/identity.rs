//! The normalized authenticated-user record held client-side.

use serde::{Deserialize, Serialize};

/// Access class determining which screens are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// Parse a role string from the remote API.
    ///
    /// Trims and compares case-insensitively. Returns `None` for anything
    /// other than the two known roles; unknown roles are unauthorized,
    /// never silently mapped to a customer default.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "CUSTOMER" => Some(Self::Customer),
            _ => None,
        }
    }

    /// Canonical uppercase wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Customer => "CUSTOMER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity. Immutable once constructed: a change of
/// identity means replacing the whole value in the session store.
///
/// Persisted field names match the wire contract of the auth endpoints so
/// a stored entry reads like the API response it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Server-side user id.
    #[serde(rename = "userId")]
    pub subject_id: i64,
    /// Login name used to authenticate.
    #[serde(rename = "username")]
    pub login_name: String,
    /// Human-readable display name.
    #[serde(rename = "fullName")]
    pub display_name: String,
    /// Normalized access role.
    pub role: Role,
}

// ── Tests ───────────────────────────────────────────────────────────
