//! Signature extraction: field names plus rendered field types.

use indexmap::IndexSet;

use super::registry::{NameRegistry, Signature};
use crate::infer::{self, TypeRef};
use crate::parser::ast::{Expr, FieldInit, RecordLit};

/// Field name used when no better one can be derived.
pub(crate) const FALLBACK_FIELD_NAME: &str = "field";
/// Rendered type for expressions inference cannot resolve.
pub(crate) const UNKNOWN_TYPE_NAME: &str = "Any";

/// Extract `lit`'s signature and register it, returning its generated name.
///
/// Anonymous shapes among the field types are extracted and registered
/// first, depth-first, so their names exist before the enclosing signature
/// is finalized. Every literal visited on the way ends up registered.
pub fn extract(lit: &RecordLit, registry: &mut NameRegistry) -> String {
    if let Some(name) = registry.name_for(lit.as_cst()) {
        return name.to_string();
    }

    let mut fields: Signature = Vec::new();
    let mut depends_on = IndexSet::new();
    for field in lit.fields() {
        let name = field_name(&field);
        let ty = field
            .value()
            .map(|value| infer::type_of(&value))
            .unwrap_or(TypeRef::Unknown);
        let rendered = render_type(&ty, registry, &mut depends_on);
        fields.push((name, rendered));
    }
    registry.register(lit, fields, depends_on)
}

/// Best-effort field naming: explicit `name:`, then a bare reference's own
/// name, then a member access's member name, then the fixed placeholder.
pub(crate) fn field_name(field: &FieldInit) -> String {
    if let Some(token) = field.name() {
        return token.text().to_string();
    }
    let derived = match field.value() {
        Some(Expr::NameRef(name_ref)) => name_ref.name().map(|t| t.text().to_string()),
        Some(Expr::Member(member)) => member.member().map(|t| t.text().to_string()),
        _ => None,
    };
    derived.unwrap_or_else(|| FALLBACK_FIELD_NAME.to_string())
}

/// Render a type reference to a declaration-ready name, substituting
/// generated names for anonymous shapes and registering them on the way.
fn render_type(
    ty: &TypeRef,
    registry: &mut NameRegistry,
    depends_on: &mut IndexSet<String>,
) -> String {
    match ty {
        TypeRef::Known(name) => name.clone(),
        TypeRef::Unknown => UNKNOWN_TYPE_NAME.to_string(),
        TypeRef::Anonymous(inner) => {
            if inner.fields().next().is_none() {
                // Zero-field literals are never promoted.
                return UNKNOWN_TYPE_NAME.to_string();
            }
            let name = extract(inner, registry);
            depends_on.insert(name.clone());
            name
        }
        TypeRef::Generic { container, args } => {
            let rendered: Vec<String> = args
                .iter()
                .map(|arg| render_type(arg, registry, depends_on))
                .collect();
            format!("{}<{}>", container, rendered.join(", "))
        }
    }
}
