//! File-backed session store.
//!
//! Two entries under the state directory, mirroring the persisted layout of
//! the portal contract:
//! - `identity.json`: the serialized [`Identity`]
//! - `token`: the raw bearer credential, never inspected client-side
//!
//! Both entries are removed together on logout.

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

use super::Identity;

/// Persisted identity entry.
const IDENTITY_FILE: &str = "identity.json";

/// Persisted bearer-token entry.
const TOKEN_FILE: &str = "token";

/// Single source of truth for "who is logged in".
///
/// Reads are served from the in-memory cache; the persisted entries are
/// only consulted at [`SessionStore::open`]. Writes replace the cached
/// value and flush the corresponding entry synchronously.
pub struct SessionStore {
    dir: PathBuf,
    identity: RwLock<Option<Identity>>,
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// Open the store rooted at `dir`, creating the directory if needed.
    ///
    /// A corrupt identity entry is diagnostic-logged and treated as "no
    /// session"; startup never fails because of bad persisted state.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create session dir {}", dir.display()))?;

        let identity = match fs::read_to_string(dir.join(IDENTITY_FILE)) {
            Ok(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    tracing::warn!("discarding malformed persisted identity: {e}");
                    None
                }
            },
            Err(_) => None,
        };

        let token = fs::read_to_string(dir.join(TOKEN_FILE))
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            dir: dir.to_path_buf(),
            identity: RwLock::new(identity),
            token: RwLock::new(token),
        })
    }

    /// The current identity, or `None` when unauthenticated.
    pub fn current_identity(&self) -> Option<Identity> {
        self.identity.read().clone()
    }

    /// Replace the current identity.
    ///
    /// `Some` persists the serialized value; `None` removes the entry.
    pub fn set_identity(&self, identity: Option<Identity>) -> Result<()> {
        let path = self.dir.join(IDENTITY_FILE);
        match &identity {
            Some(value) => {
                let raw = serde_json::to_string(value)?;
                fs::write(&path, raw)
                    .with_context(|| format!("failed to persist identity to {}", path.display()))?;
            }
            None => remove_if_present(&path)?,
        }
        *self.identity.write() = identity;
        Ok(())
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Store a bearer token issued by the remote API.
    pub fn set_token(&self, token: &str) -> Result<()> {
        let path = self.dir.join(TOKEN_FILE);
        fs::write(&path, token)
            .with_context(|| format!("failed to persist token to {}", path.display()))?;
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    /// Remove both persisted entries and drop the cached state.
    pub fn clear(&self) -> Result<()> {
        remove_if_present(&self.dir.join(TOKEN_FILE))?;
        remove_if_present(&self.dir.join(IDENTITY_FILE))?;
        *self.token.write() = None;
        *self.identity.write() = None;
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}

// ── Tests ───────────────────────────────────────────────────────────
