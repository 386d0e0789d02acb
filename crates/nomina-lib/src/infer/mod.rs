//! Best-effort local type inference.
//!
//! `type_of` walks a single expression and the scopes above it; there is no
//! global constraint solving. Anything it cannot resolve is `Unknown`, which
//! callers render as the placeholder type.

mod types;


pub use types::TypeRef;

use crate::parser::SyntaxKind;
use crate::parser::ast::{CallExpr, Expr, Lambda, LetDecl, NameRef, RecordDecl};

/// Infer the type of an expression in its tree context.
pub fn type_of(expr: &Expr) -> TypeRef {
    // `visiting` guards against `let` bindings that reference themselves,
    // directly or through other bindings.
    type_of_inner(expr, &mut Vec::new())
}

fn type_of_inner(expr: &Expr, visiting: &mut Vec<String>) -> TypeRef {
    match expr {
        Expr::Literal(lit) => match lit.token().map(|t| t.kind()) {
            Some(SyntaxKind::Int) => TypeRef::known("Int"),
            Some(SyntaxKind::Str) => TypeRef::known("String"),
            Some(SyntaxKind::KwTrue) | Some(SyntaxKind::KwFalse) => TypeRef::known("Bool"),
            _ => TypeRef::Unknown,
        },
        Expr::RecordLit(lit) => TypeRef::Anonymous(lit.clone()),
        Expr::ListLit(list) => {
            let element = list
                .elements()
                .next()
                .map(|e| type_of_inner(&e, visiting))
                .unwrap_or(TypeRef::Unknown);
            TypeRef::list(element)
        }
        Expr::Binary(bin) => {
            let lhs = bin.lhs().map(|e| type_of_inner(&e, visiting));
            let rhs = bin.rhs().map(|e| type_of_inner(&e, visiting));
            match (lhs, rhs) {
                (Some(TypeRef::Known(l)), Some(TypeRef::Known(r))) if l == "Int" && r == "Int" => {
                    TypeRef::known("Int")
                }
                _ => TypeRef::Unknown,
            }
        }
        Expr::Paren(paren) => paren
            .inner()
            .map(|e| type_of_inner(&e, visiting))
            .unwrap_or(TypeRef::Unknown),
        Expr::NameRef(name_ref) => type_of_name(name_ref, visiting),
        Expr::Call(call) => type_of_call(call, visiting),
        Expr::Member(_) | Expr::Lambda(_) => TypeRef::Unknown,
    }
}

fn type_of_name(name_ref: &NameRef, visiting: &mut Vec<String>) -> TypeRef {
    let Some(token) = name_ref.name() else {
        return TypeRef::Unknown;
    };
    let name = token.text();

    let mut node = name_ref.as_cst().clone();
    while let Some(parent) = node.parent() {
        // Lambda parameters shadow outer bindings.
        if let Some(lambda) = Lambda::cast(parent.clone())
            && lambda.param().is_some_and(|p| p.text() == name)
        {
            return lambda_param_type(&lambda, visiting);
        }

        if matches!(parent.kind(), SyntaxKind::Module | SyntaxKind::Root) {
            for child in parent.children() {
                let Some(decl) = LetDecl::cast(child) else {
                    continue;
                };
                if decl.name().is_none_or(|n| n.text() != name) {
                    continue;
                }
                if visiting.iter().any(|v| v == name) {
                    return TypeRef::Unknown;
                }
                visiting.push(name.to_string());
                let ty = decl
                    .value()
                    .map(|v| type_of_inner(&v, visiting))
                    .unwrap_or(TypeRef::Unknown);
                visiting.pop();
                return ty;
            }
        }

        node = parent;
    }
    TypeRef::Unknown
}

/// A lambda parameter is typed only in the `map(list, x => body)` position:
/// it takes the element type of the list argument.
fn lambda_param_type(lambda: &Lambda, visiting: &mut Vec<String>) -> TypeRef {
    let Some(call) = lambda.as_cst().parent().and_then(CallExpr::cast) else {
        return TypeRef::Unknown;
    };
    if !is_map_call(&call) {
        return TypeRef::Unknown;
    }
    let Some(list_arg) = call.args().next() else {
        return TypeRef::Unknown;
    };
    type_of_inner(&list_arg, visiting)
        .element()
        .cloned()
        .unwrap_or(TypeRef::Unknown)
}

fn type_of_call(call: &CallExpr, visiting: &mut Vec<String>) -> TypeRef {
    let Some(Expr::NameRef(callee)) = call.callee() else {
        return TypeRef::Unknown;
    };
    let Some(token) = callee.name() else {
        return TypeRef::Unknown;
    };
    let name = token.text();

    if name == "map" {
        let body_ty = match call.args().nth(1) {
            Some(Expr::Lambda(lambda)) => lambda
                .body()
                .map(|b| type_of_inner(&b, visiting))
                .unwrap_or(TypeRef::Unknown),
            _ => TypeRef::Unknown,
        };
        return TypeRef::list(body_ty);
    }

    if record_in_scope(call, name) {
        return TypeRef::known(name);
    }
    TypeRef::Unknown
}

fn is_map_call(call: &CallExpr) -> bool {
    match call.callee() {
        Some(Expr::NameRef(n)) => n.name().is_some_and(|t| t.text() == "map"),
        _ => false,
    }
}

fn record_in_scope(call: &CallExpr, name: &str) -> bool {
    call.as_cst()
        .ancestors()
        .filter(|a| matches!(a.kind(), SyntaxKind::Module | SyntaxKind::Root))
        .any(|scope| {
            scope
                .children()
                .filter_map(RecordDecl::cast)
                .any(|decl| decl.name().is_some_and(|n| n.text() == name))
        })
}
