//! Data directory handling.
//!
//! The store owns the path to the favorites file and the (de)serialization
//! of its contents. Higher-level operations live in the repository.

use crate::error::{DbError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name of the single persisted key. The value is a JSON array of
/// course ids, e.g. `["entrepreneuriat","anglais-affaires"]`.
pub const FAVORITES_FILE: &str = "course_favorites.json";

/// Handle on the data directory.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Open or create the data directory at the specified path.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        } else if !dir.is_dir() {
            return Err(DbError::NotADirectory(dir.display().to_string()));
        }
        Ok(Self {
            path: dir.join(FAVORITES_FILE),
        })
    }

    /// Path of the favorites file inside the data directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted favorite ids.
    ///
    /// A missing file is simply the empty set. Unreadable or malformed
    /// contents (manually corrupted storage) log a warning and also yield
    /// the empty set rather than failing startup.
    pub fn load(&self) -> Vec<String> {
        if !self.path.exists() {
            return Vec::new();
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to read {}: {}, starting with no favorites", self.path.display(), err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!("malformed favorites data in {}: {}, starting with no favorites", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted favorite ids.
    pub fn persist(&self, favorites: &[String]) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
