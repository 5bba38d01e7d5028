//! Property tests for entity name validation.

use proptest::prelude::*;

use cqrsgen::application::DEFAULT_NAMESPACE;
use cqrsgen::{build, CSharpRenderer, EntityName, GenError, Generator};

/// Identifier-shaped names over several scripts, mixed with characters that
/// cannot appear in identifiers (`²`, `½`) or cannot start one (U+0345)
fn unicode_entity() -> impl Strategy<Value = String> {
    let start = prop_oneof![
        Just('_'),
        proptest::char::range('A', 'Z'),
        proptest::char::range('\u{00C0}', '\u{00D6}'),
        proptest::char::range('\u{03B1}', '\u{03C9}'),
        proptest::char::range('\u{0410}', '\u{044F}'),
        proptest::char::range('\u{4E00}', '\u{4FFF}'),
        proptest::char::range('\u{AC00}', '\u{ACFF}'),
        proptest::char::range('\u{2160}', '\u{216F}'),
        Just('\u{0345}'),
        Just('\u{0301}'),
    ];
    let part = prop_oneof![
        Just('_'),
        proptest::char::range('a', 'z'),
        proptest::char::range('0', '9'),
        proptest::char::range('\u{00E0}', '\u{00F6}'),
        proptest::char::range('\u{0300}', '\u{036F}'),
        proptest::char::range('\u{0660}', '\u{0669}'),
        proptest::char::range('\u{3041}', '\u{3096}'),
        Just('\u{00B2}'),
        Just('\u{00BD}'),
    ];
    (start, proptest::collection::vec(part, 0..10))
        .prop_map(|(first, rest)| std::iter::once(first).chain(rest).collect::<String>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identifier-shaped names are accepted unchanged.
    #[test]
    fn property_identifier_names_parse(name in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
        let parsed = EntityName::parse(&name).unwrap();
        prop_assert_eq!(parsed.as_str(), name.as_str());
    }

    /// PROPERTY: a name starting with a digit is rejected before any artifact exists.
    #[test]
    fn property_leading_digit_rejected(name in "[0-9][A-Za-z0-9]{0,10}") {
        let is_invalid_name = matches!(build(&name), Err(GenError::InvalidEntityName { .. }));
        prop_assert!(is_invalid_name);
    }

    /// PROPERTY: names containing separators or punctuation are rejected.
    #[test]
    fn property_punctuation_rejected(
        head in "[A-Za-z]{1,8}",
        sep in "[ .<>{}();,:+\\-/\"']",
        tail in "[A-Za-z]{0,8}",
    ) {
        let name = format!("{}{}{}", head, sep, tail);
        prop_assert!(EntityName::parse(&name).is_err());
    }

    /// PROPERTY: `EntityName::parse` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,64}") {
        let _ = EntityName::parse(&raw);
    }

    /// PROPERTY: an accepted name renders; only name validation can refuse it.
    #[test]
    fn property_accepted_unicode_names_render(name in unicode_entity()) {
        let generator = Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new());
        match generator.generate_entity(&name) {
            Ok(unit) => {
                let declaration = format!("public class Get{}ByIdQuery", name);
                prop_assert!(unit.text().contains(&declaration));
            }
            Err(GenError::InvalidEntityName { .. }) => {}
            Err(e) => prop_assert!(false, "{} rendering {:?}", e, name),
        }
    }

    /// PROPERTY: no printable input makes the renderer reject its own model.
    #[test]
    fn property_printable_input_never_malformed(raw in "\\PC{1,12}") {
        let generator = Generator::new(
            DEFAULT_NAMESPACE,
            CSharpRenderer::new().with_syntax_check(false),
        );
        let is_malformed = matches!(
            generator.generate_entity(&raw),
            Err(GenError::MalformedArtifact { .. })
        );
        prop_assert!(!is_malformed, "{:?}", raw);
    }

    /// PROPERTY: names carrying a non-identifier number are rejected.
    #[test]
    fn property_superscripts_rejected(
        head in "[A-Za-z]{1,6}",
        tail in "[\u{00B2}\u{00B3}\u{00B9}\u{00BC}-\u{00BE}]{1,3}",
    ) {
        let name = format!("{}{}", head, tail);
        let is_invalid_name = matches!(build(&name), Err(GenError::InvalidEntityName { .. }));
        prop_assert!(is_invalid_name);
    }
}
