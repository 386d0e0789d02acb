//! Lexer, CST, and typed AST for the nomina language.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod parser_tests;

pub use ast::Root;
pub use core::{ParseResult, Parser};
pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

use crate::Error;

/// Lex and parse source into a lossless syntax tree.
///
/// Returns `Err` only on fatal conditions (recursion limit); ordinary syntax
/// errors land in the result's diagnostics with the tree still produced.
pub fn parse(source: &str) -> Result<ParseResult, Error> {
    let tokens = lexer::lex(source);
    Parser::new(source, tokens).parse()
}
