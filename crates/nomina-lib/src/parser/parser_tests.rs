use indoc::indoc;

use super::ast::{Expr, Item};
use super::cst::SyntaxKind;
use crate::test_utils::{let_value, parse_source};

#[test]
fn parses_let_with_record_literal() {
    let root = parse_source(r#"let person = {Name: "John", Age: 30}"#);
    let Expr::RecordLit(lit) = let_value(&root, "person") else {
        panic!("expected a record literal");
    };
    let names: Vec<Option<String>> = lit
        .fields()
        .map(|f| f.name().map(|t| t.text().to_string()))
        .collect();
    assert_eq!(names, vec![Some("Name".to_string()), Some("Age".to_string())]);
}

#[test]
fn shorthand_fields_have_no_name_token() {
    let root = parse_source("let a = 1\nlet s = {a, b: 2}");
    let Expr::RecordLit(lit) = let_value(&root, "s") else {
        panic!("expected a record literal");
    };
    let fields: Vec<_> = lit.fields().collect();
    assert_eq!(fields.len(), 2);
    assert!(fields[0].name().is_none());
    assert!(matches!(fields[0].value(), Some(Expr::NameRef(_))));
    assert!(fields[1].name().is_some());
}

#[test]
fn parses_nested_module_items() {
    let root = parse_source(indoc! {"
        mod people {
            record Person(name: String)
            let anon = 1
        }
        let top = 2
    "});
    let items: Vec<Item> = root.items().collect();
    assert_eq!(items.len(), 2);
    let Item::Module(module) = &items[0] else {
        panic!("expected a module first");
    };
    assert_eq!(module.name().map(|t| t.text().to_string()).as_deref(), Some("people"));
    assert_eq!(module.items().count(), 2);
}

#[test]
fn parses_generic_type_parameters() {
    let root = parse_source("record Wrapper(items: List<Int>, table: Map<String, Int>)");
    let Some(Item::RecordDecl(decl)) = root.items().next() else {
        panic!("expected a record declaration");
    };
    let params: Vec<_> = decl.params().collect();
    assert_eq!(params.len(), 2);

    let list = params[0].ty().expect("first param has a type");
    assert_eq!(list.name().map(|t| t.text().to_string()).as_deref(), Some("List"));
    assert_eq!(list.args().count(), 1);

    let map = params[1].ty().expect("second param has a type");
    assert_eq!(map.args().count(), 2);
}

#[test]
fn binary_precedence_nests_multiplication_deeper() {
    let root = parse_source("let y = 1 + 2 * 3");
    let Expr::Binary(add) = let_value(&root, "y") else {
        panic!("expected a binary expression");
    };
    assert_eq!(add.op().map(|t| t.kind()), Some(SyntaxKind::Plus));
    let Some(Expr::Binary(mul)) = add.rhs() else {
        panic!("expected the rhs to be the multiplication");
    };
    assert_eq!(mul.op().map(|t| t.kind()), Some(SyntaxKind::Star));
}

#[test]
fn binary_operators_are_left_associative() {
    let root = parse_source("let y = 1 - 2 - 3");
    let Expr::Binary(outer) = let_value(&root, "y") else {
        panic!("expected a binary expression");
    };
    assert!(matches!(outer.lhs(), Some(Expr::Binary(_))));
    assert!(matches!(outer.rhs(), Some(Expr::Literal(_))));
}

#[test]
fn parses_call_with_lambda_argument() {
    let root = parse_source("let xs = [1]\nlet r = map(xs, x => x * x)");
    let Expr::Call(call) = let_value(&root, "r") else {
        panic!("expected a call");
    };
    let Some(Expr::NameRef(callee)) = call.callee() else {
        panic!("expected a name callee");
    };
    assert_eq!(callee.name().map(|t| t.text().to_string()).as_deref(), Some("map"));

    let args: Vec<Expr> = call.args().collect();
    assert_eq!(args.len(), 2);
    let Expr::Lambda(lambda) = &args[1] else {
        panic!("expected a lambda second argument");
    };
    assert_eq!(lambda.param().map(|t| t.text().to_string()).as_deref(), Some("x"));
    assert!(matches!(lambda.body(), Some(Expr::Binary(_))));
}

#[test]
fn lambda_arrow_survives_surrounding_whitespace() {
    let root = parse_source("let f = x => 1");
    let Expr::Lambda(lambda) = let_value(&root, "f") else {
        panic!("expected a lambda");
    };
    assert_eq!(lambda.param().map(|t| t.text().to_string()).as_deref(), Some("x"));
    assert!(matches!(lambda.body(), Some(Expr::Literal(_))));
}

#[test]
fn field_colon_survives_surrounding_whitespace() {
    let root = parse_source("let r = {Items : 1}");
    let Expr::RecordLit(lit) = let_value(&root, "r") else {
        panic!("expected a record literal");
    };
    let field = lit.fields().next().expect("one field");
    assert_eq!(field.name().map(|t| t.text().to_string()).as_deref(), Some("Items"));
    assert!(matches!(field.value(), Some(Expr::Literal(_))));
}

#[test]
fn parses_chained_member_access() {
    let root = parse_source("let m = a.b.c");
    let Expr::Member(outer) = let_value(&root, "m") else {
        panic!("expected member access");
    };
    assert_eq!(outer.member().map(|t| t.text().to_string()).as_deref(), Some("c"));
    assert!(matches!(outer.target(), Some(Expr::Member(_))));
}

#[test]
fn cst_preserves_all_source_text() {
    let source = "mod m {\n  // keep me\n  let x = {a: 1}\n}\n";
    let root = parse_source(source);
    assert_eq!(root.as_cst().text().to_string(), source);
}

#[test]
fn unclosed_record_literal_reports_error() {
    let parsed = crate::parser::parse("let x = {a: 1").expect("not fatal");
    assert!(parsed.diagnostics.has_errors());
}

#[test]
fn bare_expression_at_top_level_is_an_error() {
    let parsed = crate::parser::parse("1 + 2").expect("not fatal");
    assert!(parsed.diagnostics.has_errors());
}

#[test]
fn trailing_trivia_only_is_fine() {
    let parsed = crate::parser::parse("let x = 1\n// done\n").expect("not fatal");
    assert!(!parsed.diagnostics.has_errors());
}

#[test]
fn deep_nesting_hits_the_recursion_limit() {
    let mut source = String::from("let x = ");
    for _ in 0..2000 {
        source.push('(');
    }
    source.push('1');
    for _ in 0..2000 {
        source.push(')');
    }
    let result = crate::parser::parse(&source);
    assert!(matches!(result, Err(crate::Error::RecursionLimitExceeded)));
}

#[test]
fn empty_source_parses_to_empty_root() {
    let parsed = crate::parser::parse("").expect("not fatal");
    assert!(!parsed.diagnostics.has_errors());
    assert_eq!(parsed.root.items().count(), 0);
}
