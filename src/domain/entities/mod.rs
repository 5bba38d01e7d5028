//! Domain Entities
//!
//! The structural model of generated code.
//! - `ArtifactSpec` - one generated type and its members
//! - `ArtifactGroup` - the four artifacts of one entity
//! - `NamespaceContainer` - a scope of groups plus required references
//! - `OutputUnit` - rendered text keyed for the host

mod artifact;
mod artifact_group;
mod namespace;
mod output_unit;

pub use artifact::{
    ArtifactSpec, MemberSpec, MethodSpec, Parameter, PropertySpec, Statement, Value,
};
pub use artifact_group::ArtifactGroup;
pub use namespace::{NamespaceContainer, HOST_CONTRACTS, LIBRARY_NAMES};
pub use output_unit::{content_hash, OutputUnit};
