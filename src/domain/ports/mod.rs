//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod output_sink;
pub mod target_renderer;

pub use output_sink::{OutputSink, SinkError, SinkOutcome, SinkResult};
pub use target_renderer::TargetRenderer;
