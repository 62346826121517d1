use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("source is not a directory: {0}")]
    SourceNotADirectory(PathBuf),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove directory {path}: {source}")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl SyncError {
    /// Configuration errors come from bad input, everything else from the filesystem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SyncError::SourceNotADirectory(_)
                | SyncError::InvalidArgument(_)
                | SyncError::InvalidPattern(_)
        )
    }
}
