//! Preferences file storage
//!
//! Owns the backing file and the process-local lock that serializes every
//! load and save. The lock does not protect against another process writing
//! the same file; this backend is a single-instance local service.

use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::types::Preferences;
use crate::types::{BackendError, Result};

/// File-backed preferences store with exclusive load/save locking
pub struct PreferencesStore {
    path: PathBuf,
    /// Serializes reads and writes of the backing file within this process
    lock: Mutex<()>,
}

impl PreferencesStore {
    /// Create a store backed by the given file path
    ///
    /// The file is not touched until the first `save`; `load` on a missing
    /// file returns defaults.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults on any read or parse failure
    ///
    /// A missing file is the expected first-run state and is not logged as a
    /// problem. Unreadable or malformed content is logged and defaulted; the
    /// caller never sees the failure.
    pub async fn load(&self) -> Preferences {
        let _guard = self.lock.lock().await;

        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preferences file at {}, using defaults", self.path.display());
                return Preferences::default();
            }
            Err(e) => {
                warn!(
                    "Failed to read preferences file {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                return Preferences::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(
                    "Malformed preferences file {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                Preferences::default()
            }
        }
    }

    /// Persist the full record, overwriting any prior content
    ///
    /// Missing parent directories are created implicitly. Any I/O failure is
    /// surfaced to the caller; a write the caller explicitly asked for must
    /// not fail silently.
    pub async fn save(&self, prefs: &Preferences) -> Result<()> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    BackendError::Storage(format!(
                        "failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| BackendError::Internal(format!("failed to serialize preferences: {}", e)))?;

        fs::write(&self.path, json).await.map_err(|e| {
            BackendError::Storage(format!(
                "failed to write preferences file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Preferences saved to {}", self.path.display());
        Ok(())
    }
}
