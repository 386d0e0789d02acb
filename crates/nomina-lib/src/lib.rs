//! Nomina promotes anonymous record literals to named record types.
//!
//! Pipeline: detect literals, derive structural signatures (depth-first,
//! nested shapes before their parents), deduplicate into generated types
//! with deterministic names, order declarations by dependency, and rewrite
//! the tree in one pure pass.
//!
//! Modules:
//! - `parser` - lexer, lossless CST, and typed AST for the nomina language
//! - `diagnostics` - message collection and rendering
//! - `infer` - best-effort local type inference
//! - `promote` - the promotion engine
//! - `report` - advisory findings for detected literals
//! - `document` - the high-level facade

pub mod diagnostics;
pub mod document;
pub mod infer;
pub mod parser;
pub mod promote;
pub mod report;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod document_tests;
#[cfg(test)]
mod report_tests;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use document::Document;
pub use promote::{GeneratedType, NameRegistry, Promotion, Signature};
pub use report::Finding;

/// Errors from parsing or applying a promotion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Input nested too deeply for the parser.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("parsing failed with {} error(s)", .0.error_count())]
    ParseFailed(Diagnostics),

    /// The document changed between planning and application.
    #[error("promotion no longer applies: the document changed since it was planned")]
    StaleTree,
}

pub type Result<T> = std::result::Result<T, Error>;
