//! Detection of anonymous record literals.

use crate::parser::SyntaxNode;
use crate::parser::ast::RecordLit;

/// Pre-order stream of anonymous record literals under `node`, nested ones
/// included. Zero-field literals have nothing to name and are skipped.
///
/// Pure tree traversal: restartable, no state, safe on shared trees.
pub fn anonymous_literals(node: &SyntaxNode) -> impl Iterator<Item = RecordLit> + '_ {
    node.descendants()
        .filter_map(RecordLit::cast)
        .filter(|lit| lit.fields().next().is_some())
}
