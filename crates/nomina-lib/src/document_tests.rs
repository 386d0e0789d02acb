use indoc::indoc;

use crate::{Document, Error};

fn promote(source: &str) -> String {
    let doc = Document::parse(source).expect("source parses");
    let rewritten = doc.promote_all().expect("promotion applies");
    rewritten.source().to_string()
}

#[test]
fn promotes_a_simple_literal() {
    let output = promote(r#"let person = {Name: "John", Age: 30}"#);
    assert_eq!(
        output,
        indoc! {r#"
            record Record001(Name: String, Age: Int)
            let person = Record001("John", 30)"#}
    );
}

#[test]
fn nested_literals_promote_innermost_first() {
    let output = promote(indoc! {r#"
        let xs = [1, 2, 3]
        let result = {Name: "a", Items: map(xs, x => {Value: x, Square: x * x})}
    "#});
    assert_eq!(
        output,
        indoc! {r#"
            record Record001(Value: Int, Square: Int)
            record Record002(Name: String, Items: List<Record001>)
            let xs = [1, 2, 3]
            let result = Record002("a", map(xs, x => Record001(x, x * x)))
        "#}
    );
}

#[test]
fn identical_shapes_share_one_declaration() {
    let output = promote(indoc! {"
        let a = {x: 1}
        let b = {x: 2}
    "});
    assert_eq!(
        output,
        indoc! {"
            record Record001(x: Int)
            let a = Record001(1)
            let b = Record001(2)
        "}
    );
}

#[test]
fn distinct_shapes_number_gap_free_in_source_order() {
    let output = promote(indoc! {r#"
        let a = {x: 1}
        let b = {y: "s"}
        let c = {z: true}
    "#});
    assert_eq!(
        output,
        indoc! {r#"
            record Record001(x: Int)
            record Record002(y: String)
            record Record003(z: Bool)
            let a = Record001(1)
            let b = Record002("s")
            let c = Record003(true)
        "#}
    );
}

#[test]
fn declarations_land_in_the_first_literal_enclosing_module() {
    let output = promote(indoc! {"
        mod m {
        let a = {x: 1}
        }
        let b = {y: 2}
    "});
    assert_eq!(
        output,
        indoc! {"
            mod m {
            record Record001(x: Int)
            record Record002(y: Int)
            let a = Record001(1)
            }
            let b = Record002(2)
        "}
    );
}

#[test]
fn promoted_output_parses_cleanly() {
    let output = promote(indoc! {r#"
        let xs = [1]
        let a = {items: map(xs, x => {v: x}), n: "s"}
    "#});
    let reparsed = Document::parse(&output).expect("promoted output stays valid");
    assert!(reparsed.findings().is_empty(), "no literals remain");
}

#[test]
fn document_without_literals_promotes_to_itself() {
    let source = "record P(x: Int)\nlet a = P(1)";
    let doc = Document::parse(source).expect("source parses");
    assert!(doc.plan_promotion().is_empty());
    let rewritten = doc.promote_all().expect("empty promotion applies");
    assert_eq!(rewritten.source(), source);
}

#[test]
fn findings_do_not_change_the_document() {
    let source = "let a = {x: 1}";
    let doc = Document::parse(source).expect("source parses");
    assert_eq!(doc.findings().len(), 1);
    assert_eq!(doc.findings().len(), 1);
    assert_eq!(doc.source(), source);
}

#[test]
fn stale_promotion_is_rejected_and_changes_nothing() {
    let original = Document::parse("let a = {x: 1}").expect("parses");
    let promotion = original.plan_promotion();
    let edited = Document::parse("let a = {x: 1, y: 2}").expect("parses");
    assert!(matches!(edited.promote(&promotion), Err(Error::StaleTree)));
    assert_eq!(edited.source(), "let a = {x: 1, y: 2}");
}

#[test]
fn parse_errors_fail_the_document() {
    let result = Document::parse("let a = {x: 1");
    assert!(matches!(result, Err(Error::ParseFailed(_))));
}

#[test]
fn comments_survive_promotion() {
    let output = promote(indoc! {"
        // people
        let a = {x: 1}
    "});
    assert_eq!(
        output,
        indoc! {"
            record Record001(x: Int)
            // people
            let a = Record001(1)
        "}
    );
}

#[test]
fn separate_documents_get_independent_numbering() {
    let first = promote("let a = {x: 1}");
    let second = promote("let b = {y: 2}");
    assert!(first.contains("Record001"));
    assert!(second.contains("Record001"), "counter restarts per document");
}
