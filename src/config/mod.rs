//! Configuration module for cqrsgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CQRSGEN_*)
//! 3. Config file (`cqrsgen.toml`, or `--config PATH`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME, CONFIG_TEMPLATE};
pub use types::{CatalogConfig, Config, NamespaceConfig, OutputConfig};
