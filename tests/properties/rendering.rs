//! Property tests for rendered C# text.

use proptest::prelude::*;

use cqrsgen::application::DEFAULT_NAMESPACE;
use cqrsgen::domain::entities::{HOST_CONTRACTS, LIBRARY_NAMES};
use cqrsgen::infrastructure::csharp::escaping::RESERVED;
use cqrsgen::{CSharpRenderer, Generator};

fn entity() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,20}")
            .unwrap()
            .prop_filter("name taken by generated code", |name| {
                !LIBRARY_NAMES.contains(&name.as_str())
                    && !HOST_CONTRACTS.iter().any(|(contract, _)| *contract == name.as_str())
            }),
        1 => proptest::sample::select(RESERVED.to_vec()).prop_map(String::from),
    ]
}

fn generator() -> Generator<CSharpRenderer> {
    // Grammar check is asserted explicitly below
    Generator::new(DEFAULT_NAMESPACE, CSharpRenderer::new().with_syntax_check(false))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every accepted entity renders to text that parses as C#.
    #[cfg(feature = "syntax-check")]
    #[test]
    fn property_rendered_text_parses(name in entity()) {
        let unit = generator().generate_entity(&name).unwrap();
        let parsed = cqrsgen::infrastructure::csharp::syntax::check(unit.text());
        prop_assert!(parsed.is_ok(), "{:?}\n{}", parsed, unit.text());
    }

    /// PROPERTY: braces balance and the unit ends with a single newline.
    #[test]
    fn property_rendered_text_is_balanced(name in entity()) {
        let unit = generator().generate_entity(&name).unwrap();
        let text = unit.text();
        prop_assert_eq!(text.matches('{').count(), text.matches('}').count());
        prop_assert!(text.ends_with("}\n"), "text does not end with closing brace + newline: {:?}", text);
        prop_assert!(!text.ends_with("\n\n"));
        prop_assert!(!text.contains('\r'));
    }

    /// PROPERTY: every unit declares exactly four classes.
    #[test]
    fn property_four_declarations(name in entity()) {
        let unit = generator().generate_entity(&name).unwrap();
        prop_assert_eq!(unit.text().matches("public class ").count(), 4);
    }
}
