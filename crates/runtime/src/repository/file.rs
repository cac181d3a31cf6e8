//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use stockpile_core::Session;

use crate::repository::{RepositoryError, Result, StateRepository};

/// File-based implementation of StateRepository.
///
/// Stores the session as a single pretty-printed JSON file. Saves write to
/// a temp file in the same directory and rename over the target, so a crash
/// mid-write leaves the previous save intact.
pub struct FileStateRepository {
    path: PathBuf,
}

impl FileStateRepository {
    /// Create a repository backed by the given file path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Create a repository in the platform's per-user data directory,
    /// e.g. `~/.local/share/stockpile/session.json` on Linux.
    pub fn in_user_data_dir() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "stockpile").ok_or(RepositoryError::NoDataDir)?;
        Self::new(dirs.data_dir().join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), nonce = session.nonce, "saved session");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&json)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), nonce = session.nonce, "loaded session");
        Ok(Some(session))
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "deleted session save");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpile_core::GameConfig;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path().join("session.json")).unwrap();

        assert!(repo.load().unwrap().is_none());

        let mut session = Session::new(99, &GameConfig::default());
        session.balance = 1234;
        repo.save(&session).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let repo =
            FileStateRepository::new(dir.path().join("nested/deeper/session.json")).unwrap();
        let session = Session::new(1, &GameConfig::default());
        repo.save(&session).unwrap();
        assert!(repo.load().unwrap().is_some());
    }

    #[test]
    fn delete_removes_the_save() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path().join("session.json")).unwrap();
        repo.save(&Session::new(1, &GameConfig::default())).unwrap();
        repo.delete().unwrap();
        assert!(repo.load().unwrap().is_none());
        // Deleting a missing save is fine.
        repo.delete().unwrap();
    }
}
