use std::path::{Path, PathBuf};

use crate::SyncError;

/// Name of the destination directory, relative to the working directory.
pub const PROTO_DIR: &str = "proto";

/// Subdirectories wiped before every sync.
pub const CLEAN_DIRS: [&str; 2] = ["core", "api"];

#[derive(Debug, Clone)]
pub struct SyncLayout {
    root: PathBuf,
}

impl SyncLayout {
    /// Layout rooted at an explicit destination directory.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Layout rooted at `<cwd>/proto`.
    pub fn from_cwd() -> Result<Self, SyncError> {
        let cwd = std::env::current_dir().map_err(|e| SyncError::Read {
            path: PathBuf::from("."),
            source: e,
        })?;
        Ok(Self::new(&cwd.join(PROTO_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn core_dir(&self) -> PathBuf {
        self.root.join(CLEAN_DIRS[0])
    }

    pub fn api_dir(&self) -> PathBuf {
        self.root.join(CLEAN_DIRS[1])
    }

    pub fn clean_dirs(&self) -> Vec<PathBuf> {
        CLEAN_DIRS.iter().map(|d| self.root.join(d)).collect()
    }

    pub fn destination_for(&self, rel_path: &Path) -> PathBuf {
        self.root.join(rel_path)
    }

    /// Remove the clean dirs. Missing directories are skipped.
    /// Returns the directories that were actually removed.
    pub fn remove_clean_dirs(&self) -> Result<Vec<PathBuf>, SyncError> {
        let mut removed = Vec::new();
        for dir in self.clean_dirs() {
            match std::fs::remove_dir_all(&dir) {
                Ok(()) => {
                    tracing::debug!(path = %dir.display(), "removed directory");
                    removed.push(dir);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(SyncError::RemoveDir { path: dir, source: e }),
            }
        }
        Ok(removed)
    }
}
