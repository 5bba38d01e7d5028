//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{DEFAULT_NAMESPACE, DEFAULT_REFERENCES};
use crate::error::GenResult;

use super::loader::{self, ConfigWarning};

/// Entity catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub entities: Vec<String>,
}

/// Namespace the generated types are placed in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamespaceConfig {
    #[serde(default = "default_namespace")]
    pub name: String,

    #[serde(default = "default_references")]
    pub references: Vec<String>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            name: default_namespace(),
            references: default_references(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_references() -> Vec<String> {
    DEFAULT_REFERENCES.iter().map(|r| r.to_string()).collect()
}

/// Where and how units are written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("Generated")
}

fn default_extension() -> String {
    "g.cs".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub namespace: NamespaceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path` if it exists, defaults otherwise; env overrides applied
    pub fn load_or_default(path: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (CQRSGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
