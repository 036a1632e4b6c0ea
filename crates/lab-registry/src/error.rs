//! Error types for lab-registry

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Did not find entry for app with name '{name}'.")]
    AppNotFound { name: String },

    #[error("app '{app}' has no release '{version}'")]
    UnknownRelease { app: String, version: String },

    #[error("invalid version constraint '{constraint}': {reason}")]
    ConstraintParse { constraint: String, reason: String },

    #[error("invalid requirement '{input}': {reason}")]
    RequirementParse { input: String, reason: String },

    #[error("invalid version label '{label}'")]
    InvalidVersionLabel { label: String },

    #[error("failed to parse registry document: {0}")]
    DocumentParse(#[from] serde_json::Error),
}
