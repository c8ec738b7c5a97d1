use gridcols::spec::{ColumnExpr, LABELS_COLUMN, matches_grammar};
use proptest::prelude::*;

#[test]
fn plain_names_are_not_expressions() {
    for spec in ["NAME", "AGE", "CPU%", "POD IP", ""] {
        assert!(!matches_grammar(spec), "{spec:?} should be plain");
        assert_eq!(ColumnExpr::parse(spec), None);
    }
}

#[test]
fn parses_bare_label_extraction() {
    let expr = ColumnExpr::parse("LABELS[app]").expect("parse");
    assert_eq!(expr.custom_name, None);
    assert_eq!(expr.header, LABELS_COLUMN);
    assert_eq!(expr.key, "app");
    assert!(expr.is_label_extraction());
}

#[test]
fn parses_custom_named_extraction_and_trims_the_name() {
    let expr = ColumnExpr::parse(" grp : LABELS[app]").expect("parse");
    assert_eq!(expr.custom_name.as_deref(), Some("grp"));
    assert_eq!(expr.header, "LABELS");
    assert_eq!(expr.key, "app");
}

#[test]
fn keys_may_contain_paths_and_dots() {
    let expr = ColumnExpr::parse("nodegroup: LABELS[platform.isolation/nodegroup]")
        .expect("parse");
    assert_eq!(expr.key, "platform.isolation/nodegroup");
}

#[test]
fn empty_keys_are_accepted_by_the_grammar() {
    let expr = ColumnExpr::parse("LABELS[]").expect("parse");
    assert_eq!(expr.key, "");
}

#[test]
fn other_headers_parse_but_are_not_label_extractions() {
    let expr = ColumnExpr::parse("env: ANNOTATIONS[team]").expect("parse");
    assert_eq!(expr.header, "ANNOTATIONS");
    assert!(!expr.is_label_extraction());
}

#[test]
fn the_custom_name_stops_at_the_first_colon() {
    // Everything between the first colon and the bracket is the header.
    let expr = ColumnExpr::parse("a:b:LABELS[x]").expect("parse");
    assert_eq!(expr.custom_name.as_deref(), Some("a"));
    assert_eq!(expr.header, "b:LABELS");
    assert!(!expr.is_label_extraction());
}

#[test]
fn trailing_text_after_the_bracket_breaks_the_match() {
    assert_eq!(ColumnExpr::parse("LABELS[app]x"), None);
    assert!(!matches_grammar("LABELS[app] "));
}

proptest! {
    #[test]
    fn names_without_brackets_never_parse(spec in "[A-Z0-9 %/._-]{0,24}") {
        prop_assert!(!matches_grammar(&spec));
        prop_assert_eq!(ColumnExpr::parse(&spec), None);
    }

    #[test]
    fn constructed_expressions_parse_back_into_their_parts(
        name in "[A-Za-z][A-Za-z0-9_-]{0,11}",
        key in "[a-z0-9./_-]{0,24}",
    ) {
        let spec = format!("{name}: LABELS[{key}]");
        let expr = ColumnExpr::parse(&spec).expect("constructed spec parses");
        prop_assert_eq!(expr.custom_name.as_deref(), Some(name.as_str()));
        prop_assert_eq!(expr.header.as_str(), LABELS_COLUMN);
        prop_assert_eq!(expr.key.as_str(), key.as_str());
        prop_assert!(expr.is_label_extraction());
    }

    #[test]
    fn bare_extractions_carry_no_custom_name(key in "[a-z0-9./_-]{0,24}") {
        let spec = format!("LABELS[{key}]");
        let expr = ColumnExpr::parse(&spec).expect("bare spec parses");
        prop_assert_eq!(expr.custom_name, None);
        prop_assert_eq!(expr.key.as_str(), key.as_str());
    }
}
