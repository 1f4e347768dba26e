//! Tests for the symbol-list extractor

mod common;

use common::{extract, parse_fragment};
use pubmark::error::{ErrorKind, SourceLocation};
use pubmark::extractor::extract_symbols;
use pubmark::fragment::{Fragment, LiteralFragment, MacroCallFragment};

#[test]
fn test_bare_identifier_extracts_to_itself() {
    assert_eq!(extract("foo").unwrap(), vec!["foo"]);
    assert_eq!(extract("_private7").unwrap(), vec!["_private7"]);
}

#[test]
fn test_macro_reference_keeps_its_sigil() {
    assert_eq!(extract("@assert_valid").unwrap(), vec!["@assert_valid"]);
}

#[test]
fn test_group_preserves_order() {
    assert_eq!(
        extract("(foo, @bar, baz)").unwrap(),
        vec!["foo", "@bar", "baz"]
    );
}

#[test]
fn test_duplicates_are_passed_through() {
    assert_eq!(extract("(foo, foo, @foo)").unwrap(), vec!["foo", "foo", "@foo"]);
}

#[test]
fn test_empty_group_extracts_to_empty_list() {
    assert_eq!(extract("()").unwrap(), Vec::<String>::new());
}

#[test]
fn test_call_in_group_is_rejected() {
    let err = extract("(foo, bar(), baz)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
    assert!(err.message.contains("bar()"), "message was: {}", err.message);
    assert!(err.message.contains("function call"));
}

#[test]
fn test_literal_in_group_is_rejected() {
    let err = extract("(foo, 42)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
    assert!(err.message.contains("literal"));
}

#[test]
fn test_macro_call_with_arguments_in_group_is_rejected() {
    let err = extract("(foo, @bar baz)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
    assert!(err.message.contains("macro call"));
}

#[test]
fn test_bare_call_is_rejected_with_its_shape() {
    let err = extract("foo()").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
    assert!(err.message.contains("function call"));
    assert!(err.message.contains("foo()"));
}

#[test]
fn test_bare_literal_is_rejected_with_its_shape() {
    let err = extract("\"foo\"").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
    assert!(err.message.contains("literal"));
}

#[test]
fn test_errors_carry_a_usage_hint() {
    let err = extract("foo()").unwrap_err();
    match err.context.help {
        Some(help) => assert!(help.contains("comma-separated")),
        None => panic!("expected a usage hint"),
    }
}

#[test]
fn test_handcrafted_marker_is_rejected() {
    let fragment = Fragment::LineMarker(SourceLocation::new(1, 1));
    let err = extract_symbols(&fragment).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
    assert!(err.message.contains("line marker"));
}

#[test]
fn test_sigil_only_macro_name_is_rejected() {
    // The parser cannot produce this shape, but handcrafted fragments can
    let fragment = Fragment::MacroCall(MacroCallFragment {
        components: vec![
            Fragment::Identifier("@".to_string()),
            Fragment::LineMarker(SourceLocation::new(1, 1)),
        ],
    });
    let err = extract_symbols(&fragment).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
}

#[test]
fn test_no_partial_result_on_failure() {
    // The failing element sits last; nothing before it leaks out
    let err = extract("(foo, bar, 42)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
}

#[test]
fn test_extraction_is_idempotent() {
    let fragment = parse_fragment("(foo, @bar, foo)").unwrap();
    let first = extract_symbols(&fragment).unwrap();
    let second = extract_symbols(&fragment).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extraction_does_not_mutate_its_input() {
    let fragment = parse_fragment("(foo, @bar)").unwrap();
    let before = fragment.clone();
    let _ = extract_symbols(&fragment).unwrap();
    assert_eq!(fragment, before);
}

#[test]
fn test_literal_fragment_shapes() {
    let int = Fragment::Literal(LiteralFragment::Int(7));
    let err = extract_symbols(&int).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedArgument);
}
