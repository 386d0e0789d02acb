//! High-level document facade.

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::parser::{self, Root};
use crate::promote::Promotion;
use crate::report::{self, Finding};

/// A parsed source document.
///
/// Detection ([`findings`](Self::findings)) is read-only and can run any
/// number of times. [`plan_promotion`](Self::plan_promotion) starts one
/// rewrite transaction with its own registry; applying it yields a new
/// document and leaves this one untouched.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Root,
}

impl Document {
    /// Parse source text. Fails with [`Error::ParseFailed`](crate::Error)
    /// when the parser reports any error-severity diagnostics.
    pub fn parse(source: &str) -> Result<Self> {
        let parsed = parser::parse(source)?;
        if parsed.diagnostics.has_errors() {
            return Err(crate::Error::ParseFailed(parsed.diagnostics));
        }
        Ok(Self {
            source: source.to_string(),
            root: parsed.root,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    /// One finding per anonymous record literal, in pre-order.
    pub fn findings(&self) -> Vec<Finding> {
        report::findings(&self.root)
    }

    /// Findings as Info diagnostics, ready for rendering.
    pub fn finding_diagnostics(&self) -> Diagnostics {
        report::to_diagnostics(&self.findings())
    }

    /// Plan a promotion batch for every literal in this document.
    pub fn plan_promotion(&self) -> Promotion {
        Promotion::plan(&self.root)
    }

    /// Apply a planned promotion, producing the rewritten document.
    ///
    /// Fails with [`Error::StaleTree`](crate::Error) if this document no
    /// longer matches the tree the promotion was planned against.
    pub fn promote(&self, promotion: &Promotion) -> Result<Document> {
        let root = promotion.apply(&self.root)?;
        let source = root.as_cst().text().to_string();
        Ok(Document { source, root })
    }

    /// Plan and apply in one step.
    pub fn promote_all(&self) -> Result<Document> {
        self.promote(&self.plan_promotion())
    }
}
