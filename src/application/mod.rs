//! Application Layer
//!
//! Use cases that orchestrate the generation flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `build` - Artifact Model Builder (entity name to artifact group)
//! - `Generator` - Catalog pass: build, render, register with the sink
//! - `diff_directory` - Preview what a pass would change on disk

pub mod builder;
pub mod diff;
pub mod generate;

pub use builder::{build, build_for, shape};
pub use diff::{diff_directory, unified_diff, ChangeType, DiffEntry, DiffResult};
pub use generate::{
    EmittedUnit, EntityFailure, FailurePolicy, GenerationReport, Generator, DEFAULT_NAMESPACE,
    DEFAULT_REFERENCES,
};
