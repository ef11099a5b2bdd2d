//! Notation round trips and parse errors across the registry.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ward_core::ConfigError;
use ward_notation::{parse, parse_nodes, quote_param, serialize};
use ward_registry::Registry;
use ward_tests::prelude::*;

/// One valid configuration per built-in kind, in canonical form.
const CANONICAL: &[(DataKind, &str)] = &[
    (DataKind::String, "[Required]"),
    (DataKind::String, "[MinLength(3)]"),
    (DataKind::Xml, "[MaxLength(100)]"),
    (DataKind::String, "[UpperCase]"),
    (DataKind::Char, "[LowerCase]"),
    (DataKind::String, "[Regex('^[a-z]+(,[a-z]+)*$',im)]"),
    (DataKind::String, "[Regex('It''s')]"),
    (DataKind::Int64, "[Range(-5,5)]"),
    (DataKind::Version, "[Range(1.0,2.10.3)]"),
    (DataKind::UInt16, "[Enum(Flags,None=0,A=1,B=2)]"),
    (DataKind::Int32, "[Type(Contoso.Access)]"),
    (
        DataKind::String,
        "[Required][MinLength(1)][MaxLength(8)][UpperCase][Regex('^[A-Z]+$')]",
    ),
];

#[test]
fn test_every_kind_round_trips() {
    for (kind, notation) in CANONICAL {
        Scenario::new(*notation)
            .kind(*kind)
            .constraints(*notation)
            .round_trip()
            .run()
            .unwrap();
    }
}

#[test]
fn test_serialize_parse_serialize_is_stable() {
    // GIVEN notation with redundant quoting and spacing
    let registry = Registry::standard();
    let loose = "  [ Regex ( '[0-9]+' ) ]\n[MinLength('2')] ";
    let strict = "[Regex('[0-9]+')][MinLength(2)]";

    // WHEN parsed and serialized
    let constraints = parse(loose, DataKind::String, &registry).unwrap();
    let canonical = serialize(&constraints);

    // THEN the canonical text is stable under another parse
    assert_eq!(canonical, strict);
    let again = parse(&canonical, DataKind::String, &registry).unwrap();
    assert_eq!(serialize(&again), canonical);
}

#[test]
fn test_error_fragments() {
    let registry = Registry::standard();

    // Unknown name: the whole group
    let err = parse("[MinLength(1)][Lenght(3)]", DataKind::String, &registry).unwrap_err();
    assert_eq!(err.fragment, "[Lenght(3)]");
    assert_eq!(err.source, Some(ConfigError::unknown_constraint("Lenght")));

    // Bad parameter: the whole group, with the parameter error as source
    let err = parse("[MaxLength(x)]", DataKind::String, &registry).unwrap_err();
    assert_eq!(err.fragment, "[MaxLength(x)]");
    assert_eq!(
        err.source.as_ref().map(|e| e.id()),
        Some(ErrorId::MalformedParameter)
    );

    // Unclosed group: to the end of input
    let err = parse_nodes("[Required][Regex('a'").unwrap_err();
    assert_eq!(err.fragment, "[Regex('a'");

    // Unterminated quote
    let err = parse_nodes("[Regex('abc)]").unwrap_err();
    assert_eq!(err.message, "unterminated quoted parameter");
    assert_eq!(err.fragment, "[Regex('abc)]");
}

#[test]
fn test_names_are_case_sensitive() {
    Scenario::new("case_sensitive_names")
        .constraints("[minlength(2)]")
        .rejected_with(ErrorId::UnknownConstraint)
        .run()
        .unwrap();
}

#[test]
fn test_empty_notation_is_an_empty_list() {
    Scenario::new("empty")
        .constraints("")
        .round_trip()
        .step("anything", "whatever", |a| a.valid())
        .null_step("null", |a| a.valid())
        .run()
        .unwrap();
}

proptest! {
    #[test]
    fn prop_range_bounds_round_trip(a in any::<i32>(), b in any::<i32>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let registry = Registry::standard();
        let text = format!("[Range({},{})]", min, max);
        let constraints = parse(&text, DataKind::Int32, &registry).unwrap();
        prop_assert_eq!(serialize(&constraints), text);
    }

    #[test]
    fn prop_regex_patterns_round_trip(pattern in "[a-z(),'\\] ]{1,12}") {
        // Literal patterns: escape every metacharacter the generator can emit
        let literal: String = pattern
            .chars()
            .map(|c| match c {
                '(' | ')' | ']' => format!("\\{}", c),
                other => other.to_string(),
            })
            .collect();
        let registry = Registry::standard();
        let text = format!("[Regex({})]", quote_param(&literal));
        let constraints = parse(&text, DataKind::String, &registry).unwrap();
        prop_assert_eq!(serialize(&constraints), text);
        prop_assert_eq!(constraints[0].parameters(), vec![literal]);
    }
}
