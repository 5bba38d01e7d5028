//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `csharp/` - C# renderer (TargetRenderer)
//! - `sink/` - Output sinks (memory, directory)

pub mod csharp;
pub mod sink;

pub use csharp::CSharpRenderer;
pub use sink::{DirectorySink, MemorySink};
