//! ArtifactKind value object - which CQRS artifact a generated type plays

use serde::{Deserialize, Serialize};

use super::EntityName;

/// The closed set of artifact shapes generated per entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// `Create{Entity}Command`
    Command,
    /// `Create{Entity}CommandHandler`
    CommandHandler,
    /// `Get{Entity}ByIdQuery`
    Query,
    /// `Get{Entity}ByIdQueryHandler`
    QueryHandler,
}

impl ArtifactKind {
    /// All kinds in emission order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Command,
        ArtifactKind::CommandHandler,
        ArtifactKind::Query,
        ArtifactKind::QueryHandler,
    ];

    /// Generated type name for this kind
    pub fn identifier(&self, entity: &EntityName) -> String {
        match self {
            ArtifactKind::Command => format!("Create{}Command", entity),
            ArtifactKind::CommandHandler => format!("Create{}CommandHandler", entity),
            ArtifactKind::Query => format!("Get{}ByIdQuery", entity),
            ArtifactKind::QueryHandler => format!("Get{}ByIdQueryHandler", entity),
        }
    }

    /// The message kind a handler processes, `None` for messages
    pub fn handled_kind(&self) -> Option<ArtifactKind> {
        match self {
            ArtifactKind::CommandHandler => Some(ArtifactKind::Command),
            ArtifactKind::QueryHandler => Some(ArtifactKind::Query),
            ArtifactKind::Command | ArtifactKind::Query => None,
        }
    }

    pub fn is_handler(&self) -> bool {
        self.handled_kind().is_some()
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::Command => "command",
            ArtifactKind::CommandHandler => "command handler",
            ArtifactKind::Query => "query",
            ArtifactKind::QueryHandler => "query handler",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
