//! Error types for the directory tree and the surfaces around it.

use thiserror::Error;

/// Errors reported by tree operations.
///
/// Every variant is locally recoverable: the session keeps running and the tree is
/// left exactly as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Directory '{0}' not found")]
    NotFound(String),

    #[error("Access denied to directory '{0}'")]
    AccessDenied(String),

    #[error("Directory '{directory}' is full (limit {limit})")]
    CapacityExceeded { directory: String, limit: usize },

    #[error("No files in directory '{0}'")]
    EmptyDirectory(String),

    #[error("File '{file}' not found in directory '{directory}'")]
    FileNotFound { directory: String, file: String },

    #[error("A directory named '{0}' already exists")]
    DuplicateName(String),

    #[error("The name '{0}' is not available")]
    NameUnavailable(String),

    #[error("File '{file}' already exists in directory '{directory}'")]
    DuplicateFile { directory: String, file: String },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
}

impl TreeError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            TreeError::NotFound(_) => "NOT_FOUND",
            TreeError::AccessDenied(_) => "ACCESS_DENIED",
            TreeError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            TreeError::EmptyDirectory(_) => "EMPTY_DIRECTORY",
            TreeError::FileNotFound { .. } => "FILE_NOT_FOUND",
            TreeError::DuplicateName(_) => "DUPLICATE_NAME",
            TreeError::NameUnavailable(_) => "NAME_UNAVAILABLE",
            TreeError::DuplicateFile { .. } => "DUPLICATE_FILE",
            TreeError::InvalidName(_) => "INVALID_NAME",
            TreeError::ResourceExhausted(_) => "RESOURCE_EXHAUSTED",
        }
    }
}

/// Errors surfaced by configuration, logging and the interactive shell.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Input(String),
}
