//! Error types for lab-core

use std::path::PathBuf;

/// Result type for core app operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core app operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] lab_registry::Error),

    #[error(transparent)]
    Git(#[from] lab_git::Error),

    #[error("No versions available for '{name}'.")]
    NoReleases { name: String },

    #[error("Failed to install '{name}' at '{path}': {source}")]
    Install {
        name: String,
        path: PathBuf,
        #[source]
        source: lab_git::Error,
    },

    /// An ecosystem key this implementation does not recognize. Registry
    /// data is assumed to only ever declare recognized keys, so this is a
    /// defect in the document, not a user-correctable condition.
    #[error("unsupported ecosystem '{key}' in dependency declarations")]
    UnsupportedEcosystem { key: String },
}
