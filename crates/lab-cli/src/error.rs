//! Error types for lab-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from lab-core
    #[error(transparent)]
    Core(#[from] lab_core::Error),

    /// Error from lab-registry
    #[error(transparent)]
    Registry(#[from] lab_registry::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Registry document could not be fetched or decoded
    #[error("failed to load app registry from '{url}': {message}")]
    RegistryFetch { url: String, message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
