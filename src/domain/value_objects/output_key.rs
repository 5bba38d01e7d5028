//! OutputKey value object - the host-facing name of one output unit

use std::fmt;

use serde::Serialize;

use super::EntityName;

const SUFFIX: &str = "CommandsAndQueries";

/// Deterministic, per-entity key under which an output unit is registered
///
/// The key is the entity name plus a fixed suffix, so distinct entities can
/// never collide and repeated runs overwrite the same slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OutputKey(String);

impl OutputKey {
    pub fn for_entity(entity: &EntityName) -> Self {
        Self(format!("{}{}", entity, SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the host should use, e.g. `ProductCommandsAndQueries.g.cs`
    pub fn file_name(&self, extension: &str) -> String {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            self.0.clone()
        } else {
            format!("{}.{}", self.0, extension)
        }
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
