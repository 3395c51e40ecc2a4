//! Local session persistence.
//!
//! The whole session is one serialized `Warehouseman` record stored as JSON
//! under a fixed storage key in the platform data directory. No tokens, no
//! refresh; possession of the record is the session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stockroom_domain::Warehouseman;

use crate::login::AuthError;

/// Fixed storage key the session file is named after.
pub const STORAGE_KEY: &str = "warehouse_auth_user";

/// File-backed store for the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the platform data directory (`<data_dir>/stockroom/`).
    pub fn new() -> Result<Self, AuthError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| AuthError::Storage("no platform data directory".to_string()))?
            .join("stockroom");
        Ok(Self::in_dir(dir))
    }

    /// Store under an explicit directory. Used by tests and embedders.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, user: &Warehouseman) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(storage_err)?;
        }
        let json = serde_json::to_vec_pretty(user)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(storage_err)
    }

    /// Current session, if any.
    ///
    /// A missing or unreadable file means "not logged in", not an error;
    /// a corrupt file is discarded with a warning.
    pub fn load(&self) -> Option<Warehouseman> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt session");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }

    /// Bearer header value derived from the stored session, if any.
    pub fn authorization_header(&self) -> Option<String> {
        self.load().map(|u| format!("Bearer {}", u.secret_key))
    }

    pub fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_err(e)),
        }
    }
}

fn storage_err(e: io::Error) -> AuthError {
    AuthError::Storage(e.to_string())
}
