//! NamespaceContainer entity - a named scope of artifact groups

use std::collections::{BTreeMap, BTreeSet};

use super::ArtifactGroup;

/// Types the consuming project must provide, with their generic arity.
/// Generated code only refers to them.
pub const HOST_CONTRACTS: [(&str, usize); 4] = [
    ("ICommand", 0),
    ("IQuery", 1),
    ("CommandHandlerBase", 1),
    ("QueryHandlerBase", 2),
];

/// Library names generated code may spell out; an entity taking one would
/// shadow it inside the generated namespace
pub const LIBRARY_NAMES: [&str; 6] = [
    "System",
    "Task",
    "Guid",
    "DateTime",
    "TimeSpan",
    "CancellationToken",
];

/// A named scope holding artifact groups plus the external references
/// (imports) their rendered text needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceContainer {
    name: String,
    references: BTreeSet<String>,
    groups: Vec<ArtifactGroup>,
}

impl NamespaceContainer {
    pub fn new<I, S>(name: impl Into<String>, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            references: references.into_iter().map(Into::into).collect(),
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: ArtifactGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// References in a stable (sorted) order
    pub fn references(&self) -> &BTreeSet<String> {
        &self.references
    }

    pub fn groups(&self) -> &[ArtifactGroup] {
        &self.groups
    }

    /// Host-provided types visible in this scope, mapped to their generic
    /// arity: the CQRS contracts and every entity the groups were generated for
    pub fn host_types(&self) -> BTreeMap<&str, usize> {
        let mut types: BTreeMap<&str, usize> = HOST_CONTRACTS.iter().copied().collect();
        for group in &self.groups {
            types.insert(group.entity().as_str(), 0);
        }
        types
    }
}
