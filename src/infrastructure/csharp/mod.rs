//! C# target
//!
//! - `escaping` - keyword escaping and comment-safe text
//! - `types` - type resolution against the container scope
//! - `writer` - indentation-aware block writer
//! - `renderer` - the `TargetRenderer` implementation
//! - `syntax` - tree-sitter round-trip check (feature `syntax-check`)

pub mod escaping;
pub mod renderer;
#[cfg(feature = "syntax-check")]
pub mod syntax;
pub mod types;
pub mod writer;

pub use renderer::CSharpRenderer;
