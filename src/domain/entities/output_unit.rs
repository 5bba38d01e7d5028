//! OutputUnit entity - one rendered compilation unit
//!
//! OutputUnits are the result of rendering one ArtifactGroup. They are what
//! gets handed to the host build under their key.

use sha2::{Digest, Sha256};

use crate::domain::value_objects::{EntityName, OutputKey};

/// A rendered, self-contained source text ready to register with the host
///
/// Equality compares key, entity and text; the hash cache is not part of it.
#[derive(Debug, Clone)]
pub struct OutputUnit {
    /// Host-facing key (unique per entity)
    key: OutputKey,
    /// Entity this unit was generated for
    entity: EntityName,
    /// Rendered source text
    text: String,
    /// Cached content hash
    hash: Option<String>,
}

impl OutputUnit {
    pub fn new(entity: EntityName, text: impl Into<String>) -> Self {
        Self {
            key: OutputKey::for_entity(&entity),
            entity,
            text: text.into(),
            hash: None,
        }
    }

    pub fn key(&self) -> &OutputKey {
        &self.key
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Compute and cache the content hash (SHA256)
    pub fn hash(&mut self) -> &str {
        let text = &self.text;
        self.hash.get_or_insert_with(|| content_hash(text))
    }

    /// The content hash without caching it; reuses a cached value if present
    pub fn content_hash(&self) -> String {
        match &self.hash {
            Some(hash) => hash.clone(),
            None => content_hash(&self.text),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into `(outputKey, text)`, the pair the host collaborator receives
    pub fn into_pair(self) -> (OutputKey, String) {
        (self.key, self.text)
    }
}

impl PartialEq for OutputUnit {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.entity == other.entity && self.text == other.text
    }
}

impl Eq for OutputUnit {}

/// SHA256 of a text, formatted as `sha256:<hex>`
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
