use std::{io::ErrorKind, path::PathBuf};

use crate::{config, error::ChecklistError, types::StoredIdentity, utils};

pub const IDENTITY_FILE: &str = "identity.json";

/// Durable storage for the local nickname.
///
/// The nickname lives in a small JSON file under the local data directory
/// and has no expiry; it disappears only through [`IdentityManager::clear`].
#[derive(Debug, Clone)]
pub struct IdentityManager {
    path: PathBuf,
}

impl Default for IdentityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityManager {
    pub fn new() -> Self {
        Self {
            path: config::data_dir().join(IDENTITY_FILE),
        }
    }

    /// Stores the identity at `path` instead of the data directory.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the stored nickname, `None` if nothing (or only blanks) is stored.
    pub async fn load(&self) -> Result<Option<String>, ChecklistError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored: StoredIdentity = serde_json::from_str(&content)?;
        let nickname = stored.nickname.trim().to_string();
        if nickname.is_empty() {
            return Ok(None);
        }

        Ok(Some(nickname))
    }

    pub async fn persist(&self, nickname: &str) -> Result<(), ChecklistError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let stored = StoredIdentity {
            nickname: nickname.to_string(),
            saved_at: utils::unix_now(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Removes the stored nickname. Clearing an empty store is fine.
    pub async fn clear(&self) -> Result<(), ChecklistError> {
        match async_fs::remove_file(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
