//! Persisted state location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the key-value file. Empty means `~/.quiz-saver/storage.json`.
    #[serde(default)]
    pub path: String,
}

impl StorageConfig {
    /// Resolve the storage file path, falling back to the home directory.
    ///
    /// Returns `None` when no path is configured and no home directory exists.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.path.is_empty() {
            return Some(PathBuf::from(&self.path));
        }
        dirs::home_dir().map(|h| h.join(".quiz-saver").join("storage.json"))
    }
}
