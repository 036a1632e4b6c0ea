//! Error types for lab-git

use std::path::PathBuf;

/// Result type for lab-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lab-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Clone failed: {message}")]
    Clone { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
