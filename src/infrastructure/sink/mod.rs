//! Output Sink Implementations
//!
//! Concrete implementations of the OutputSink port.

mod directory;
mod memory;

pub use directory::DirectorySink;
pub use memory::MemorySink;
