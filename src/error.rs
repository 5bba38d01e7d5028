//! Error types for cqrsgen
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SinkError;

/// Result type alias for cqrsgen operations
pub type GenResult<T> = Result<T, GenError>;

/// Main error type for cqrsgen operations
#[derive(Error, Debug)]
pub enum GenError {
    /// Entity name cannot be used as an identifier fragment
    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    /// The artifact model is internally inconsistent (a generator bug)
    #[error("malformed artifact '{artifact}': {reason}")]
    MalformedArtifact { artifact: String, reason: String },

    /// The same entity appears twice in one catalog
    #[error("duplicate entity '{name}' in catalog")]
    DuplicateEntity { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The host collaborator refused an output unit
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::InvalidEntityName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(artifact: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::MalformedArtifact {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-readable kind, used in JSON reports
    pub fn kind(&self) -> &'static str {
        match self {
            GenError::InvalidEntityName { .. } => "invalid_entity_name",
            GenError::MalformedArtifact { .. } => "malformed_artifact",
            GenError::DuplicateEntity { .. } => "duplicate_entity",
            GenError::Config { .. } => "config",
            GenError::Sink(_) => "sink",
            GenError::Io(_) => "io",
        }
    }
}
