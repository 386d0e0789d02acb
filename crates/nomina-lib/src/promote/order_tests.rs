use indexmap::IndexSet;

use super::order::sort_by_dependency;
use super::registry::GeneratedType;

fn ty(name: &str, deps: &[&str]) -> GeneratedType {
    GeneratedType {
        name: name.to_string(),
        fields: vec![("x".to_string(), "Int".to_string())],
        depends_on: deps.iter().map(|d| d.to_string()).collect::<IndexSet<_>>(),
    }
}

fn names(ordered: &[GeneratedType]) -> Vec<&str> {
    ordered.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn dependency_free_types_keep_creation_order() {
    let ordered = sort_by_dependency(vec![ty("Record001", &[]), ty("Record002", &[])]);
    assert_eq!(names(&ordered), vec!["Record001", "Record002"]);
}

#[test]
fn dependencies_come_before_dependents() {
    // Creation order puts the dependent first; ordering must flip them.
    let ordered = sort_by_dependency(vec![
        ty("Record001", &["Record002"]),
        ty("Record002", &[]),
    ]);
    assert_eq!(names(&ordered), vec!["Record002", "Record001"]);
}

#[test]
fn chains_resolve_over_multiple_rounds() {
    let ordered = sort_by_dependency(vec![
        ty("Record001", &["Record002"]),
        ty("Record002", &["Record003"]),
        ty("Record003", &[]),
    ]);
    assert_eq!(names(&ordered), vec!["Record003", "Record002", "Record001"]);
}

#[test]
fn ties_within_a_round_keep_creation_order() {
    let ordered = sort_by_dependency(vec![
        ty("Record001", &["Record003"]),
        ty("Record002", &["Record003"]),
        ty("Record003", &[]),
    ]);
    assert_eq!(names(&ordered), vec!["Record003", "Record001", "Record002"]);
}

#[test]
fn cyclic_input_falls_back_to_creation_order() {
    let ordered = sort_by_dependency(vec![
        ty("Record001", &["Record002"]),
        ty("Record002", &["Record001"]),
        ty("Record003", &[]),
    ]);
    assert_eq!(names(&ordered), vec!["Record003", "Record001", "Record002"]);
}

#[test]
fn empty_input_is_fine() {
    assert!(sort_by_dependency(Vec::new()).is_empty());
}
