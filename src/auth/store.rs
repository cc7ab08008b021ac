use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::auth::Identity;
use crate::errors::ClientError;

/// Slot names for the two pieces of durable session state.
const IDENTITY_SLOT: &str = "user";
const TOKEN_SLOT: &str = "token";

/// Durable storage for the authenticated session.
///
/// Two named slots: the identity (JSON-encoded) and the bearer token (raw
/// string). The token is read fresh on every API call, so implementations
/// must not cache across calls. Stored state is trusted verbatim; there is
/// no expiry or server-side re-validation until an API call fails.
pub trait SessionStore: Send + Sync {
    /// Reads the stored identity; `None` when absent or malformed.
    fn load(&self) -> Option<Identity>;

    fn save(&self, identity: &Identity) -> Result<(), ClientError>;

    /// Reads the stored bearer token, if any.
    fn token(&self) -> Option<String>;

    fn save_token(&self, token: &str) -> Result<(), ClientError>;

    /// Removes the identity and any cached token.
    fn clear(&self);
}

/// Filesystem-backed session store: one file per slot under a directory.
pub struct FsSessionStore {
    dir: PathBuf,
}

impl FsSessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(slot)
    }

    fn write_slot(&self, slot: &str, contents: &str) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| ClientError::Session(format!("cannot create session dir: {}", e)))?;
        fs::write(self.slot_path(slot), contents)
            .map_err(|e| ClientError::Session(format!("cannot write {} slot: {}", slot, e)))
    }
}

impl SessionStore for FsSessionStore {
    fn load(&self) -> Option<Identity> {
        let raw = fs::read_to_string(self.slot_path(IDENTITY_SLOT)).ok()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(error = %e, "stored identity is malformed; treating as signed out");
                None
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<(), ClientError> {
        let encoded = serde_json::to_string(identity)
            .map_err(|e| ClientError::Session(format!("cannot encode identity: {}", e)))?;
        self.write_slot(IDENTITY_SLOT, &encoded)
    }

    fn token(&self) -> Option<String> {
        fs::read_to_string(self.slot_path(TOKEN_SLOT))
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn save_token(&self, token: &str) -> Result<(), ClientError> {
        self.write_slot(TOKEN_SLOT, token)
    }

    fn clear(&self) {
        let _ = fs::remove_file(self.slot_path(IDENTITY_SLOT));
        let _ = fs::remove_file(self.slot_path(TOKEN_SLOT));
    }
}

/// In-memory session store for tests and embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<MemorySlots>,
}

#[derive(Default)]
struct MemorySlots {
    identity: Option<String>,
    token: Option<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw identity slot, bypassing encoding. Lets tests exercise
    /// the malformed-slot path.
    pub fn set_raw_identity(&self, raw: impl Into<String>) {
        self.inner.lock().unwrap().identity = Some(raw.into());
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Identity> {
        let raw = self.inner.lock().unwrap().identity.clone()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(error = %e, "stored identity is malformed; treating as signed out");
                None
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<(), ClientError> {
        let encoded = serde_json::to_string(identity)
            .map_err(|e| ClientError::Session(format!("cannot encode identity: {}", e)))?;
        self.inner.lock().unwrap().identity = Some(encoded);
        Ok(())
    }

    fn token(&self) -> Option<String> {
        self.inner.lock().unwrap().token.clone()
    }

    fn save_token(&self, token: &str) -> Result<(), ClientError> {
        self.inner.lock().unwrap().token = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        let mut slots = self.inner.lock().unwrap();
        slots.identity = None;
        slots.token = None;
    }
}
