//! Diff Use Case
//!
//! Compares freshly rendered units against what is on disk:
//! 1. Every rendered unit is a create, an update or unchanged
//! 2. Every `*.{ext}` file with no rendered counterpart would be removed
//!
//! Nothing is written.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use similar::TextDiff;

use crate::domain::value_objects::OutputKey;
use crate::error::GenResult;

/// Type of change for one unit file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// File does not exist yet
    Create,
    /// File exists with different content
    Update,
    /// File is already up-to-date
    Unchanged,
    /// Stale file no unit maps to
    Remove,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiffEntry {
    pub path: PathBuf,
    pub change: ChangeType,
    /// Unified diff, absent for unchanged files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.change != ChangeType::Unchanged)
    }

    pub fn count(&self, change: ChangeType) -> usize {
        self.entries.iter().filter(|e| e.change == change).count()
    }
}

/// Diff `units` against the files in `dir`
pub fn diff_directory(
    units: &BTreeMap<OutputKey, String>,
    dir: &Path,
    extension: &str,
) -> GenResult<DiffResult> {
    let extension = extension.trim_start_matches('.');
    let mut result = DiffResult::default();

    for (key, new) in units {
        let path = dir.join(key.file_name(extension));
        let entry = match fs::read_to_string(&path) {
            Ok(old) if old == *new => DiffEntry {
                path,
                change: ChangeType::Unchanged,
                patch: None,
            },
            Ok(old) => DiffEntry {
                patch: Some(unified_diff(&path, &old, new)),
                path,
                change: ChangeType::Update,
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => DiffEntry {
                patch: Some(unified_diff(&path, "", new)),
                path,
                change: ChangeType::Create,
            },
            Err(e) => return Err(e.into()),
        };
        result.entries.push(entry);
    }

    for path in stale_files(units, dir, extension)? {
        let old = fs::read_to_string(&path)?;
        result.entries.push(DiffEntry {
            patch: Some(unified_diff(&path, &old, "")),
            path,
            change: ChangeType::Remove,
        });
    }

    Ok(result)
}

/// `--- a/path` / `+++ b/path` unified diff of two texts
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}

fn stale_files(
    units: &BTreeMap<OutputKey, String>,
    dir: &Path,
    extension: &str,
) -> GenResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if extension.is_empty() {
        return Ok(Vec::new());
    }

    let suffix = format!(".{}", extension);
    let mut stale = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = name.strip_suffix(&suffix) else {
            continue;
        };
        if path.is_file() && !units.keys().any(|k| k.as_str() == stem) {
            stale.push(path);
        }
    }
    stale.sort();
    Ok(stale)
}
