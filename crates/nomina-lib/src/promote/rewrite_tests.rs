use indexmap::IndexSet;

use super::registry::GeneratedType;
use super::rewrite::{Promotion, render_decl};
use crate::test_utils::parse_source;

#[test]
fn renders_a_declaration_with_parameters() {
    let ty = GeneratedType {
        name: "Record001".to_string(),
        fields: vec![
            ("Name".to_string(), "String".to_string()),
            ("Age".to_string(), "Int".to_string()),
        ],
        depends_on: IndexSet::new(),
    };
    insta::assert_snapshot!(render_decl(&ty), @"record Record001(Name: String, Age: Int)");
}

#[test]
fn renders_a_declaration_without_parameters_gracefully() {
    let ty = GeneratedType {
        name: "Record001".to_string(),
        fields: Vec::new(),
        depends_on: IndexSet::new(),
    };
    insta::assert_snapshot!(render_decl(&ty), @"record Record001()");
}

#[test]
fn plan_lists_declarations_in_dependency_order() {
    let root = parse_source("let a = {inner: {b: 1}}");
    let promotion = Promotion::plan(&root);
    let names: Vec<&str> = promotion
        .declarations()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["Record001", "Record002"]);
}

#[test]
fn plan_without_literals_is_empty() {
    let root = parse_source("let a = 1");
    let promotion = Promotion::plan(&root);
    assert!(promotion.is_empty());
}

#[test]
fn shorthand_fields_forward_their_expressions() {
    let root = parse_source("let x = 1\nlet s = {x, p.y}");
    let promotion = Promotion::plan(&root);
    let rewritten = promotion.apply(&root).expect("promotion applies");
    let text = rewritten.as_cst().text().to_string();
    assert!(text.contains("Record001(x, p.y)"), "got: {text}");
}

#[test]
fn apply_rejects_a_different_tree() {
    let planned_against = parse_source("let a = {x: 1}");
    let other = parse_source("let a = {x: 1}\nlet b = 2");
    let promotion = Promotion::plan(&planned_against);
    assert!(matches!(
        promotion.apply(&other),
        Err(crate::Error::StaleTree)
    ));
}

#[test]
fn apply_accepts_a_reparsed_identical_tree() {
    let source = "let a = {x: 1}";
    let promotion = Promotion::plan(&parse_source(source));
    let reparsed = parse_source(source);
    assert!(promotion.apply(&reparsed).is_ok());
}

#[test]
fn apply_is_repeatable_against_the_same_tree() {
    let root = parse_source("let a = {x: 1}");
    let promotion = Promotion::plan(&root);
    let first = promotion.apply(&root).expect("first apply");
    let second = promotion.apply(&root).expect("second apply");
    assert_eq!(
        first.as_cst().text().to_string(),
        second.as_cst().text().to_string()
    );
}

#[test]
fn original_tree_is_untouched() {
    let source = "let a = {x: 1}";
    let root = parse_source(source);
    let promotion = Promotion::plan(&root);
    let _rewritten = promotion.apply(&root).expect("promotion applies");
    assert_eq!(root.as_cst().text().to_string(), source);
}
