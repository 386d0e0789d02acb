use crate::report::{findings, to_diagnostics};
use crate::test_utils::parse_source;

#[test]
fn one_finding_per_literal_in_pre_order() {
    let source = "let a = {outer: {x: 1}}\nlet b = {y: 2}";
    let root = parse_source(source);
    let found = findings(&root);
    assert_eq!(found.len(), 3);
    assert!(found[0].start < found[1].start);
    assert!(found[1].start < found[2].start);
}

#[test]
fn findings_carry_field_names_in_source_order() {
    let root = parse_source(r#"let p = {Name: "John", Age: 30, x}"#);
    let found = findings(&root);
    assert_eq!(found[0].fields, vec!["Name", "Age", "x"]);
    assert_eq!(
        found[0].message(),
        "anonymous record literal with fields `Name, Age, x`"
    );
}

#[test]
fn reporting_is_idempotent() {
    let root = parse_source("let a = {x: 1}");
    assert_eq!(findings(&root), findings(&root));
}

#[test]
fn findings_are_informational_not_errors() {
    let root = parse_source("let a = {x: 1}");
    let diagnostics = to_diagnostics(&findings(&root));
    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert_eq!(
        diagnostics.messages().collect::<Vec<_>>(),
        vec!["anonymous record literal with fields `x`"]
    );
}

#[test]
fn findings_serialize_for_machine_output() {
    let root = parse_source("let a = {x: 1}");
    let json = serde_json::to_value(findings(&root)).expect("serializes");
    let entry = &json[0];
    assert!(entry["start"].is_number());
    assert!(entry["end"].is_number());
    assert_eq!(entry["fields"][0], "x");
}

#[test]
fn no_literals_means_no_findings() {
    let root = parse_source("let a = 1\nrecord P(x: Int)");
    assert!(findings(&root).is_empty());
}
