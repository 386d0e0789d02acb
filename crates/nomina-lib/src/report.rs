//! Advisory findings for detected anonymous literals.
//!
//! Reporting is the read-only half of detection: it runs on every check,
//! touches no registry, and yields the same findings for the same tree
//! every time.

use rowan::TextRange;
use serde::Serialize;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::ast::Root;
use crate::promote::detect::anonymous_literals;
use crate::promote::signature::field_name;

/// One finding per detected anonymous record literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub start: u32,
    pub end: u32,
    /// Field names in source order.
    pub fields: Vec<String>,
}

impl Finding {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start.into(), self.end.into())
    }

    pub fn message(&self) -> String {
        DiagnosticKind::AnonymousRecordLiteral.message(Some(&self.fields.join(", ")))
    }
}

/// Collect findings in pre-order.
pub fn findings(root: &Root) -> Vec<Finding> {
    anonymous_literals(root.as_cst())
        .map(|lit| {
            let range = lit.as_cst().text_range();
            Finding {
                start: range.start().into(),
                end: range.end().into(),
                fields: lit.fields().map(|f| field_name(&f)).collect(),
            }
        })
        .collect()
}

/// Findings as Info-severity diagnostics, for terminal rendering.
pub fn to_diagnostics(findings: &[Finding]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for finding in findings {
        diagnostics
            .report(DiagnosticKind::AnonymousRecordLiteral, finding.range())
            .message(finding.fields.join(", "))
            .emit();
    }
    diagnostics
}
