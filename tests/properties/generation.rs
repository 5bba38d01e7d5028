//! Property tests for artifact construction and the generation pass.

use std::collections::BTreeSet;

use proptest::prelude::*;

use cqrsgen::application::DEFAULT_NAMESPACE;
use cqrsgen::domain::entities::{HOST_CONTRACTS, LIBRARY_NAMES};
use cqrsgen::{build, ArtifactKind, CSharpRenderer, FailurePolicy, Generator, MemorySink};

fn entity() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,24}")
        .unwrap()
        .prop_filter("name taken by generated code", |name| {
            !LIBRARY_NAMES.contains(&name.as_str())
                && !HOST_CONTRACTS.iter().any(|(contract, _)| *contract == name.as_str())
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: building the same entity twice gives identical groups and text.
    #[test]
    fn property_generation_is_deterministic(name in entity()) {
        prop_assert_eq!(build(&name).unwrap(), build(&name).unwrap());

        let generator = Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new());
        let first = generator.generate_entity(&name).unwrap();
        let second = generator.generate_entity(&name).unwrap();
        prop_assert_eq!(first.text(), second.text());
        prop_assert_eq!(first.content_hash(), second.content_hash());
    }

    /// PROPERTY: each handler's base type is closed over its sibling, and the
    /// query's result type is the entity.
    #[test]
    fn property_handlers_are_wired(name in entity()) {
        let group = build(&name).unwrap();
        let command = group.artifact(ArtifactKind::Command).identifier().to_string();
        let query = group.artifact(ArtifactKind::Query).identifier().to_string();

        let command_handler = group.artifact(ArtifactKind::CommandHandler);
        prop_assert_eq!(command_handler.base_type().args()[0].name(), Some(command.as_str()));

        let query_handler = group.artifact(ArtifactKind::QueryHandler);
        let args = query_handler.base_type().args();
        prop_assert_eq!(args[0].name(), Some(query.as_str()));
        prop_assert_eq!(args[1].name(), Some(name.as_str()));

        let query_base = group.artifact(ArtifactKind::Query).base_type();
        prop_assert_eq!(query_base.args()[0].name(), Some(name.as_str()));
    }

    /// PROPERTY: distinct entities never share an output key.
    #[test]
    fn property_keys_are_injective(names in proptest::collection::btree_set(entity(), 1..8)) {
        let catalog: Vec<String> = names.iter().cloned().collect();
        let mut sink = MemorySink::new();
        let report = Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new())
            .run(&catalog, &mut sink, FailurePolicy::FailFast)
            .unwrap();

        let keys: BTreeSet<&str> = report.keys().map(|k| k.as_str()).collect();
        prop_assert_eq!(keys.len(), catalog.len());
        prop_assert_eq!(sink.len(), catalog.len());
        for name in &catalog {
            let key = format!("{}CommandsAndQueries", name);
            prop_assert!(keys.contains(key.as_str()));
        }
    }

    /// PROPERTY: catalog order is the emission order.
    #[test]
    fn property_emission_follows_catalog(names in proptest::collection::btree_set(entity(), 1..6)) {
        let mut catalog: Vec<String> = names.into_iter().collect();
        catalog.reverse();
        let mut sink = MemorySink::new();
        let report = Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new())
            .run(&catalog, &mut sink, FailurePolicy::FailFast)
            .unwrap();

        let entities: Vec<&str> = report.emitted.iter().map(|e| e.entity.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(String::as_str).collect();
        prop_assert_eq!(entities, expected);
    }
}
