//! ArtifactGroup entity - the four artifacts generated for one entity

use crate::domain::value_objects::{ArtifactKind, EntityName, OutputKey};
use crate::error::{GenError, GenResult};

use super::ArtifactSpec;

/// Exactly one artifact of each kind, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactGroup {
    entity: EntityName,
    artifacts: Vec<ArtifactSpec>,
}

impl ArtifactGroup {
    /// Group artifacts for `entity`, enforcing the group invariants:
    /// one artifact per kind, and every handler closed over its sibling
    /// message type.
    pub fn new(entity: EntityName, mut artifacts: Vec<ArtifactSpec>) -> GenResult<Self> {
        for kind in ArtifactKind::ALL {
            let count = artifacts.iter().filter(|a| a.kind() == kind).count();
            if count != 1 {
                return Err(GenError::malformed(
                    entity.as_str(),
                    format!("expected exactly one {} artifact, found {}", kind, count),
                ));
            }
        }
        artifacts.sort_by_key(|a| a.kind());

        let group = Self { entity, artifacts };
        group.check_handler_wiring()?;
        Ok(group)
    }

    fn check_handler_wiring(&self) -> GenResult<()> {
        for handler in &self.artifacts {
            let Some(handled) = handler.kind().handled_kind() else {
                continue;
            };
            let sibling = self.artifact(handled).identifier();
            let first_arg = handler.base_type().args().first().and_then(|t| t.name());
            if first_arg != Some(sibling) {
                return Err(GenError::malformed(
                    handler.identifier(),
                    format!(
                        "base type '{}' must be parameterized by sibling '{}'",
                        handler.base_type(),
                        sibling
                    ),
                ));
            }
        }
        Ok(())
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    /// Artifacts in emission order (command, command handler, query, query handler)
    pub fn artifacts(&self) -> &[ArtifactSpec] {
        &self.artifacts
    }

    /// The artifact of the given kind; present by construction
    pub fn artifact(&self, kind: ArtifactKind) -> &ArtifactSpec {
        // ALL lists kinds in declaration order, which is also the sort order
        &self.artifacts[kind as usize]
    }

    pub fn output_key(&self) -> OutputKey {
        OutputKey::for_entity(&self.entity)
    }
}
