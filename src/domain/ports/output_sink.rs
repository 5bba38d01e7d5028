//! OutputSink port - the host collaborator that receives generated units
//!
//! The core never writes files itself. Whatever includes generated text in
//! the surrounding build (a directory on disk, an in-memory map in tests)
//! implements this trait.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::OutputUnit;

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Host-side failures while registering output
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the unit failed
    #[error("failed to register '{key}' at {path}: {source}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The host refused the unit
    #[error("host rejected '{key}': {message}")]
    Rejected { key: String, message: String },
}

/// What the sink did with a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkOutcome {
    /// New or changed content was stored
    Written,
    /// Identical content was already present
    Unchanged,
}

pub trait OutputSink {
    /// Register one unit under its key, replacing any previous content
    fn register(&mut self, unit: &OutputUnit) -> SinkResult<SinkOutcome>;
}
