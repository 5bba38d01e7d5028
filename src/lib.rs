//! cqrsgen - build-time CQRS code generator
//!
//! For every entity name in a catalog, cqrsgen builds a create-command, a
//! get-by-id query and a handler for each, renders them as one C# compilation
//! unit, and hands the `(outputKey, text)` pair to the host build.
//!
//! ```
//! use cqrsgen::application::{FailurePolicy, Generator, DEFAULT_NAMESPACE};
//! use cqrsgen::infrastructure::{CSharpRenderer, MemorySink};
//!
//! let generator = Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new());
//! let mut sink = MemorySink::new();
//! generator
//!     .run(&["Product"], &mut sink, FailurePolicy::FailFast)
//!     .unwrap();
//!
//! let text = sink.get("ProductCommandsAndQueries").unwrap();
//! assert!(text.contains("public class CreateProductCommand : ICommand"));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{build, FailurePolicy, GenerationReport, Generator};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{ArtifactGroup, ArtifactSpec, NamespaceContainer, OutputUnit};
pub use domain::ports::{OutputSink, TargetRenderer};
pub use domain::value_objects::{ArtifactKind, EntityName, OutputKey};
pub use error::{GenError, GenResult};
pub use infrastructure::{CSharpRenderer, DirectorySink, MemorySink};
