//! Type references produced by inference.

use crate::parser::ast::RecordLit;

/// Result of local inference for one expression.
///
/// `Anonymous` carries the literal node itself so downstream passes can
/// recurse into its shape instead of a flattened name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type: a builtin (`Int`, `String`, `Bool`) or a declared record.
    Known(String),
    /// An anonymous record literal shape.
    Anonymous(RecordLit),
    /// A parameterized container, e.g. `List<Int>`.
    Generic {
        container: String,
        args: Vec<TypeRef>,
    },
    /// Inference gave up.
    Unknown,
}

impl TypeRef {
    pub fn known(name: impl Into<String>) -> Self {
        TypeRef::Known(name.into())
    }

    pub fn list(element: TypeRef) -> Self {
        TypeRef::Generic {
            container: "List".to_string(),
            args: vec![element],
        }
    }

    /// The element type, for `List<T>`.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Generic { container, args } if container == "List" => args.first(),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeRef::Unknown)
    }
}
