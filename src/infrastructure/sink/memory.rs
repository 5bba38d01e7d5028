//! In-memory sink
//!
//! Holds registered units in a key-ordered map. Used by tests and by the
//! `preview`/`diff` commands.

use std::collections::BTreeMap;

use crate::domain::entities::{content_hash, OutputUnit};
use crate::domain::ports::{OutputSink, SinkOutcome, SinkResult};
use crate::domain::value_objects::OutputKey;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    units: BTreeMap<OutputKey, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, text)| text.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &OutputKey> {
        self.units.keys()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<OutputKey, String> {
        self.units
    }
}

impl OutputSink for MemorySink {
    fn register(&mut self, unit: &OutputUnit) -> SinkResult<SinkOutcome> {
        let unchanged = self
            .units
            .get(unit.key())
            .is_some_and(|existing| content_hash(existing) == unit.content_hash());
        if unchanged {
            return Ok(SinkOutcome::Unchanged);
        }
        self.units.insert(unit.key().clone(), unit.text().to_string());
        Ok(SinkOutcome::Written)
    }
}
