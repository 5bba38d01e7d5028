//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_kind;
mod entity_name;
mod output_key;
mod type_ref;

pub use artifact_kind::ArtifactKind;
pub(crate) use entity_name::is_identifier;
pub use entity_name::EntityName;
pub use output_key::OutputKey;
pub use type_ref::{Primitive, TypeRef};
