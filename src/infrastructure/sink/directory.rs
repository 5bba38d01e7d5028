//! Directory sink
//!
//! Writes each unit to `{dir}/{key}.{ext}`. Writes go through a temp file in
//! the same directory and are persisted over the target, so a reader never
//! sees a half-written unit. Units whose on-disk content already hashes the
//! same are left untouched.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::{content_hash, OutputUnit};
use crate::domain::ports::{OutputSink, SinkError, SinkOutcome, SinkResult};

#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    extension: String,
    /// File names registered during this run
    registered: BTreeSet<String>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
            registered: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path a unit with `key` is written to
    pub fn path_for(&self, key: &str) -> PathBuf {
        if self.extension.is_empty() {
            self.root.join(key)
        } else {
            self.root.join(format!("{}.{}", key, self.extension))
        }
    }

    /// Delete `*.{ext}` files in the directory that were not registered
    /// during this run. Returns the removed paths, sorted.
    pub fn prune(&self) -> SinkResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("*", &self.root, e)),
        };

        let suffix = format!(".{}", self.extension);
        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.io_error("*", &self.root, e))?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !path.is_file() || !name.ends_with(&suffix) || self.registered.contains(name) {
                continue;
            }
            fs::remove_file(&path).map_err(|e| self.io_error(name, &path, e))?;
            tracing::info!(path = %path.display(), "pruned stale unit");
            removed.push(path);
        }
        removed.sort();
        Ok(removed)
    }

    fn io_error(&self, key: &str, path: &Path, source: std::io::Error) -> SinkError {
        SinkError::Write {
            key: key.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }

    fn write_atomic(&self, key: &str, path: &Path, text: &str) -> SinkResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| self.io_error(key, &self.root, e))?;
        let mut tmp =
            NamedTempFile::new_in(&self.root).map_err(|e| self.io_error(key, path, e))?;
        tmp.write_all(text.as_bytes())
            .map_err(|e| self.io_error(key, path, e))?;
        tmp.persist(path)
            .map_err(|e| self.io_error(key, path, e.error))?;
        Ok(())
    }
}

impl OutputSink for DirectorySink {
    fn register(&mut self, unit: &OutputUnit) -> SinkResult<SinkOutcome> {
        let key = unit.key().as_str();
        let path = self.path_for(key);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.registered.insert(name.to_string());
        }

        let unchanged = fs::read_to_string(&path)
            .map(|existing| content_hash(&existing) == unit.content_hash())
            .unwrap_or(false);
        if unchanged {
            tracing::debug!(key, "unit unchanged, skipping write");
            return Ok(SinkOutcome::Unchanged);
        }

        self.write_atomic(key, &path, unit.text())?;
        Ok(SinkOutcome::Written)
    }
}
