//! Domain Layer
//!
//! The core of cqrsgen: the structural model of generated artifacts,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Artifact specs, groups, namespace containers, output units
//! - `value_objects/` - Immutable value types (EntityName, ArtifactKind, TypeRef)
//! - `ports/` - Interface definitions for renderers and host sinks
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Model construction is deterministic
//! 3. **Ports & Adapters** - Target syntax and host I/O go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
