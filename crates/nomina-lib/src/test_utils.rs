//! Shared helpers for unit tests.

use crate::parser::ast::{Expr, LetDecl, RecordLit, Root};
use crate::parser;

/// Parse source that is expected to be well-formed.
pub fn parse_source(source: &str) -> Root {
    let parsed = parser::parse(source).expect("parse hit a fatal limit");
    assert!(
        !parsed.diagnostics.has_errors(),
        "unexpected parse errors: {:?}",
        parsed.diagnostics
    );
    parsed.root
}

/// The initializer expression of `let <name> = ...`, anywhere in the tree.
pub fn let_value(root: &Root, name: &str) -> Expr {
    root.as_cst()
        .descendants()
        .filter_map(LetDecl::cast)
        .find(|decl| decl.name().is_some_and(|n| n.text() == name))
        .and_then(|decl| decl.value())
        .unwrap_or_else(|| panic!("no `let {name}` with a value"))
}

/// All record literals in the tree, pre-order, zero-field ones included.
pub fn record_literals(root: &Root) -> Vec<RecordLit> {
    root.as_cst()
        .descendants()
        .filter_map(RecordLit::cast)
        .collect()
}
