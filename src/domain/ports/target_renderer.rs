//! TargetRenderer port - turns the structural model into target-language text
//!
//! A renderer is the only component that knows a target language's syntax.
//! It must either return text that parses under that language's grammar or
//! fail with `MalformedArtifact`; it never returns partially valid text.

use crate::domain::entities::{ArtifactGroup, NamespaceContainer, OutputUnit};
use crate::error::GenResult;

pub trait TargetRenderer {
    /// Name of the target language, for diagnostics
    fn language(&self) -> &'static str;

    /// Default file extension for units in this language (without dot)
    fn file_extension(&self) -> &'static str;

    /// Render a whole namespace container to one compilation unit
    fn render_container(&self, container: &NamespaceContainer) -> GenResult<String>;

    /// Render one artifact group into its own keyed output unit
    fn render(
        &self,
        group: ArtifactGroup,
        namespace: &str,
        references: &[String],
    ) -> GenResult<OutputUnit> {
        let entity = group.entity().clone();
        let container =
            NamespaceContainer::new(namespace, references.iter().cloned()).with_group(group);
        let text = self.render_container(&container)?;
        Ok(OutputUnit::new(entity, text))
    }
}
