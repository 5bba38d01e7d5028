//! Generation Pass
//!
//! Walks an entity catalog in order: build each artifact group, render it,
//! hand the unit to the host sink. Entities are independent; what happens
//! after one fails is the caller's choice (`FailurePolicy`).

use std::collections::BTreeSet;

use serde::Serialize;

use super::builder::build_for;
use crate::domain::entities::OutputUnit;
use crate::domain::ports::{OutputSink, SinkOutcome, TargetRenderer};
use crate::domain::value_objects::{EntityName, OutputKey};
use crate::error::{GenError, GenResult};

/// Namespace every generated type is placed in unless configured otherwise
pub const DEFAULT_NAMESPACE: &str = "CQRSArchitect.Application.Generated";

/// References the generated code needs (`Guid`, `Task`)
pub const DEFAULT_REFERENCES: [&str; 2] = ["System", "System.Threading.Tasks"];

/// What to do after one entity fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing entity and return its error
    #[default]
    FailFast,
    /// Record the failure and continue with the next entity
    KeepGoing,
}

/// One unit handed to the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedUnit {
    pub key: OutputKey,
    pub entity: String,
    pub outcome: SinkOutcome,
    pub hash: String,
}

/// One entity that produced no unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityFailure {
    pub entity: String,
    pub kind: &'static str,
    pub message: String,
}

/// Result of a generation pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub namespace: String,
    pub emitted: Vec<EmittedUnit>,
    pub failures: Vec<EntityFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn written_count(&self) -> usize {
        self.count(SinkOutcome::Written)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(SinkOutcome::Unchanged)
    }

    /// Emitted keys in catalog order
    pub fn keys(&self) -> impl Iterator<Item = &OutputKey> {
        self.emitted.iter().map(|e| &e.key)
    }

    fn count(&self, outcome: SinkOutcome) -> usize {
        self.emitted.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Builds and renders entities into one configured namespace
pub struct Generator<R: TargetRenderer> {
    namespace: String,
    references: Vec<String>,
    renderer: R,
}

impl<R: TargetRenderer> Generator<R> {
    /// Generator with the default references
    pub fn new(namespace: impl Into<String>, renderer: R) -> Self {
        Self {
            namespace: namespace.into(),
            references: DEFAULT_REFERENCES.iter().map(|r| r.to_string()).collect(),
            renderer,
        }
    }

    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Build and render one catalog entry
    ///
    /// An entity may not take the root name of a configured reference:
    /// `using` directives inside the namespace would resolve to the entity.
    pub fn generate_entity(&self, raw: &str) -> GenResult<OutputUnit> {
        let entity = EntityName::parse(raw)?;
        if let Some(reference) = self
            .references
            .iter()
            .find(|r| r.split('.').next() == Some(entity.as_str()))
        {
            return Err(GenError::invalid_name(
                raw,
                format!("shadows the referenced namespace '{}'", reference),
            ));
        }
        let group = build_for(&entity)?;
        self.renderer
            .render(group, &self.namespace, &self.references)
    }

    /// Run the pass over `catalog`, registering each unit with `sink`
    ///
    /// Sink failures always abort the pass: they concern the host, not the
    /// entity being processed.
    pub fn run<S, E>(
        &self,
        catalog: &[E],
        sink: &mut S,
        policy: FailurePolicy,
    ) -> GenResult<GenerationReport>
    where
        S: OutputSink + ?Sized,
        E: AsRef<str>,
    {
        let mut report = GenerationReport {
            namespace: self.namespace.clone(),
            ..Default::default()
        };
        let mut seen = BTreeSet::new();

        for raw in catalog.iter().map(AsRef::as_ref) {
            let result = if seen.insert(raw) {
                self.generate_entity(raw)
            } else {
                Err(GenError::DuplicateEntity {
                    name: raw.to_string(),
                })
            };

            let mut unit = match result {
                Ok(unit) => unit,
                Err(e) if policy == FailurePolicy::KeepGoing => {
                    tracing::warn!(entity = raw, error = %e, "entity skipped");
                    report.failures.push(EntityFailure {
                        entity: raw.to_string(),
                        kind: e.kind(),
                        message: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let outcome = sink.register(&unit)?;
            tracing::info!(key = %unit.key(), ?outcome, "emitted unit");
            report.emitted.push(EmittedUnit {
                key: unit.key().clone(),
                entity: unit.entity().to_string(),
                outcome,
                hash: unit.hash().to_string(),
            });
        }

        Ok(report)
    }
}
