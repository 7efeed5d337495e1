use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to the notes directory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("note not found: {0}")]
    NotFound(String),
    #[error("note already exists: {0}")]
    AlreadyExists(String),
    #[error("invalid note name {0:?}")]
    InvalidName(String),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(super) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
