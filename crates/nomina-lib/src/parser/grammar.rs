//! Recursive-descent grammar for the nomina language.
//!
//! Items: `mod`, `record`, `let`. Expressions: binary arithmetic over a
//! postfix tier (member access, calls) over primaries (literals, name
//! references, lambdas, record literals, lists, parens). Lambdas need LL(2):
//! `Ident =>` starts a lambda, a lone `Ident` is a name reference.

use super::core::Parser;
use super::cst::{SyntaxKind, token_sets};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);
        loop {
            self.skip_trivia_to_buffer();
            if self.should_stop() {
                break;
            }
            self.parse_item();
        }
        self.eat_trivia();
        self.finish_node();
    }

    fn parse_item(&mut self) {
        match self.current() {
            SyntaxKind::KwMod => self.parse_module(),
            SyntaxKind::KwRecord => self.parse_record_decl(),
            SyntaxKind::KwLet => self.parse_let(),
            _ => self.error_and_bump_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `let`, `record`, or `mod`",
            ),
        }
    }

    fn parse_module(&mut self) {
        self.start_node(SyntaxKind::Module);
        self.bump(); // `mod`
        self.expect(SyntaxKind::Ident, "module name");

        if !self.enter_recursion() {
            self.finish_node();
            return;
        }
        let open = self.current_span();
        if self.expect(SyntaxKind::BraceOpen, "`{` after module name") {
            while !self.currently_is(SyntaxKind::BraceClose) && !self.should_stop() {
                self.parse_item();
            }
            if !self.eat_token(SyntaxKind::BraceClose) {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedModule,
                    "module body opened here",
                    open,
                );
            }
        }
        self.exit_recursion();
        self.finish_node();
    }

    fn parse_record_decl(&mut self) {
        self.start_node(SyntaxKind::RecordDecl);
        self.bump(); // `record`
        self.expect(SyntaxKind::Ident, "record name");

        let open = self.current_span();
        if self.expect(SyntaxKind::ParenOpen, "`(` after record name") {
            while !self.currently_is(SyntaxKind::ParenClose) && !self.should_stop() {
                self.parse_param();
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            if !self.eat_token(SyntaxKind::ParenClose) {
                self.error_unclosed_delimiter(
                    DiagnosticKind::UnclosedParen,
                    "parameter list opened here",
                    open,
                );
            }
        }
        self.finish_node();
    }

    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::Param);
        self.expect(SyntaxKind::Ident, "parameter name");
        self.expect(SyntaxKind::Colon, "`:` after parameter name");
        self.parse_type_expr();
        self.finish_node();
    }

    fn parse_type_expr(&mut self) {
        self.start_node(SyntaxKind::TypeExpr);
        if !self.enter_recursion() {
            self.finish_node();
            return;
        }
        if self.eat_token(SyntaxKind::Ident) {
            if self.eat_token(SyntaxKind::Lt) {
                loop {
                    self.parse_type_expr();
                    if !self.eat_token(SyntaxKind::Comma) {
                        break;
                    }
                }
                self.expect(SyntaxKind::Gt, "`>` closing type arguments");
            }
        } else {
            self.error(DiagnosticKind::ExpectedTypeName);
        }
        self.exit_recursion();
        self.finish_node();
    }

    fn parse_let(&mut self) {
        self.start_node(SyntaxKind::LetDecl);
        self.bump(); // `let`
        self.expect(SyntaxKind::Ident, "binding name");
        self.expect(SyntaxKind::Equals, "`=` after binding name");
        if self.currently_is_one_of(token_sets::EXPR_FIRST) {
            self.parse_expr();
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();
    }

    pub(super) fn parse_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.parse_add_expr();
        self.exit_recursion();
    }

    fn parse_add_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_mul_expr();
        while self.currently_is_one_of(token_sets::ADD_OPS) && !self.should_stop() {
            // Re-using the checkpoint nests left-associatively.
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump(); // operator
            self.parse_mul_expr();
            self.finish_node();
        }
    }

    fn parse_mul_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_postfix_expr();
        while self.currently_is_one_of(token_sets::MUL_OPS) && !self.should_stop() {
            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump(); // operator
            self.parse_postfix_expr();
            self.finish_node();
        }
    }

    fn parse_postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary();
        loop {
            match self.current() {
                SyntaxKind::Dot => {
                    self.start_node_at(checkpoint, SyntaxKind::MemberExpr);
                    self.bump(); // `.`
                    self.expect(SyntaxKind::Ident, "member name after `.`");
                    self.finish_node();
                }
                SyntaxKind::ParenOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::CallExpr);
                    let open = self.current_span();
                    self.bump(); // `(`
                    while !self.currently_is(SyntaxKind::ParenClose) && !self.should_stop() {
                        if self.currently_is_one_of(token_sets::EXPR_FIRST) {
                            self.parse_expr();
                        } else {
                            self.error(DiagnosticKind::ExpectedExpression);
                        }
                        if !self.eat_token(SyntaxKind::Comma) {
                            break;
                        }
                    }
                    if !self.eat_token(SyntaxKind::ParenClose) {
                        self.error_unclosed_delimiter(
                            DiagnosticKind::UnclosedParen,
                            "argument list opened here",
                            open,
                        );
                    }
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_primary(&mut self) {
        match self.current() {
            SyntaxKind::Int | SyntaxKind::Str | SyntaxKind::KwTrue | SyntaxKind::KwFalse => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Ident => {
                if self.next_is(SyntaxKind::Arrow) {
                    self.parse_lambda();
                } else {
                    self.start_node(SyntaxKind::NameRef);
                    self.bump();
                    self.finish_node();
                }
            }
            SyntaxKind::BraceOpen => self.parse_record_lit(),
            SyntaxKind::BracketOpen => self.parse_list_lit(),
            SyntaxKind::ParenOpen => self.parse_paren_expr(),
            _ => self.error_and_bump(DiagnosticKind::ExpectedExpression),
        }
    }

    fn parse_lambda(&mut self) {
        self.start_node(SyntaxKind::Lambda);
        self.bump(); // parameter name
        self.expect(SyntaxKind::Arrow, "`=>` after lambda parameter");
        if self.currently_is_one_of(token_sets::EXPR_FIRST) {
            self.parse_expr();
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();
    }

    fn parse_record_lit(&mut self) {
        self.start_node(SyntaxKind::RecordLit);
        let open = self.current_span();
        self.bump(); // `{`
        while !self.currently_is(SyntaxKind::BraceClose) && !self.should_stop() {
            self.parse_field_init();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        if !self.eat_token(SyntaxKind::BraceClose) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedRecord,
                "record literal opened here",
                open,
            );
        }
        self.finish_node();
    }

    fn parse_field_init(&mut self) {
        self.start_node(SyntaxKind::FieldInit);
        if self.currently_is(SyntaxKind::Ident) && self.next_is(SyntaxKind::Colon) {
            self.bump(); // field name
            self.expect(SyntaxKind::Colon, "`:` after field name");
        }
        if self.currently_is_one_of(token_sets::EXPR_FIRST) {
            self.parse_expr();
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();
    }

    fn parse_list_lit(&mut self) {
        self.start_node(SyntaxKind::ListLit);
        let open = self.current_span();
        self.bump(); // `[`
        while !self.currently_is(SyntaxKind::BracketClose) && !self.should_stop() {
            if self.currently_is_one_of(token_sets::EXPR_FIRST) {
                self.parse_expr();
            } else {
                self.error(DiagnosticKind::ExpectedExpression);
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        if !self.eat_token(SyntaxKind::BracketClose) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedList,
                "list literal opened here",
                open,
            );
        }
        self.finish_node();
    }

    fn parse_paren_expr(&mut self) {
        self.start_node(SyntaxKind::ParenExpr);
        let open = self.current_span();
        self.bump(); // `(`
        if self.currently_is_one_of(token_sets::EXPR_FIRST) {
            self.parse_expr();
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        if !self.eat_token(SyntaxKind::ParenClose) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedParen,
                "parenthesized expression opened here",
                open,
            );
        }
        self.finish_node();
    }
}
