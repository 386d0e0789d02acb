//! The promotion transaction: pure green-tree rewriting.
//!
//! A [`Promotion`] is planned once from a detection pass and applied at most
//! once per document state. Application never mutates the input tree: it
//! rebuilds the green tree from the bottom up, sharing every untouched
//! subtree, and returns a fresh root.

use std::collections::HashMap;

use rowan::{GreenNode, GreenToken, NodeOrToken};

use super::detect;
use super::order;
use super::registry::{GeneratedType, NameRegistry};
use super::signature;
use crate::parser::ast::{RecordLit, Root};
use crate::parser::{SyntaxKind, SyntaxNode};
use crate::{Error, Result};

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// A planned batch rewrite: declarations to insert, literals to replace.
///
/// All-or-nothing by construction - the output tree only exists if every
/// replacement succeeded, and the input tree is never touched.
#[derive(Debug, Clone)]
pub struct Promotion {
    root: SyntaxNode,
    base_text: String,
    decls: Vec<GeneratedType>,
    names: HashMap<SyntaxNode, String>,
    scope: SyntaxNode,
}

impl Promotion {
    /// Detect every anonymous literal under `root`, derive and deduplicate
    /// signatures, and order the resulting declarations.
    ///
    /// The insertion scope is the nearest enclosing `mod` block of the first
    /// detected literal, or the file's root scope when there is none.
    pub fn plan(root: &Root) -> Promotion {
        let mut registry = NameRegistry::new();
        let mut first_literal: Option<RecordLit> = None;
        for lit in detect::anonymous_literals(root.as_cst()) {
            if first_literal.is_none() {
                first_literal = Some(lit.clone());
            }
            signature::extract(&lit, &mut registry);
        }

        let decls = order::sort_by_dependency(registry.types().cloned().collect());
        let scope = first_literal
            .map(|lit| insertion_scope(&lit, root.as_cst()))
            .unwrap_or_else(|| root.as_cst().clone());

        Promotion {
            root: root.as_cst().clone(),
            base_text: root.as_cst().text().to_string(),
            decls,
            names: registry.node_names().clone(),
            scope,
        }
    }

    /// Ordered declarations this promotion will insert.
    pub fn declarations(&self) -> &[GeneratedType] {
        &self.decls
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Apply the planned rewrite against `current`.
    ///
    /// Fails with [`Error::StaleTree`] - leaving `current` untouched - when
    /// its text no longer matches the tree this promotion was planned from.
    pub fn apply(&self, current: &Root) -> Result<Root> {
        if current.as_cst().text() != self.base_text.as_str() {
            return Err(Error::StaleTree);
        }
        if self.decls.is_empty() {
            return Ok(current.clone());
        }

        let decl_greens = self
            .decls
            .iter()
            .map(decl_green)
            .collect::<Result<Vec<_>>>()?;
        let green = self.rebuild(&self.root, &decl_greens);
        let root = Root::cast(SyntaxNode::new_root(green))
            .expect("rebuild preserves the root node kind");
        Ok(root)
    }

    fn rebuild(&self, node: &SyntaxNode, decls: &[GreenNode]) -> GreenNode {
        if let Some(name) = self.names.get(node) {
            return self.constructor_green(node, name, decls);
        }
        if !self.touches(node) {
            return node.green().into_owned();
        }

        let at_scope = node == &self.scope;
        let mut children: Vec<GreenElement> = Vec::new();

        if at_scope && node.kind() == SyntaxKind::Root {
            for decl in decls {
                children.push(NodeOrToken::Node(decl.clone()));
                children.push(NodeOrToken::Token(newline_green()));
            }
        }

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(child_node) => {
                    children.push(NodeOrToken::Node(self.rebuild(&child_node, decls)));
                }
                NodeOrToken::Token(token) => {
                    let is_open_brace = token.kind() == SyntaxKind::BraceOpen;
                    children.push(NodeOrToken::Token(token.green().to_owned()));
                    if at_scope && is_open_brace {
                        for decl in decls {
                            children.push(NodeOrToken::Token(newline_green()));
                            children.push(NodeOrToken::Node(decl.clone()));
                        }
                    }
                }
            }
        }

        GreenNode::new(node.kind().into(), children)
    }

    /// Replace a registered literal with `Name(arg, ...)`, forwarding its
    /// field value expressions in order. Arguments are rebuilt recursively,
    /// so literals nested inside them are replaced too.
    fn constructor_green(&self, node: &SyntaxNode, name: &str, decls: &[GreenNode]) -> GreenNode {
        let Some(lit) = RecordLit::cast(node.clone()) else {
            return node.green().into_owned();
        };

        let name_ref = GreenNode::new(
            SyntaxKind::NameRef.into(),
            [NodeOrToken::Token(GreenToken::new(
                SyntaxKind::Ident.into(),
                name,
            ))],
        );

        let mut children: Vec<GreenElement> = vec![
            NodeOrToken::Node(name_ref),
            NodeOrToken::Token(GreenToken::new(SyntaxKind::ParenOpen.into(), "(")),
        ];

        let mut first = true;
        for field in lit.fields() {
            let Some(value) = field.value() else {
                continue;
            };
            if !first {
                children.push(NodeOrToken::Token(GreenToken::new(
                    SyntaxKind::Comma.into(),
                    ",",
                )));
                children.push(NodeOrToken::Token(GreenToken::new(
                    SyntaxKind::Whitespace.into(),
                    " ",
                )));
            }
            first = false;
            children.push(NodeOrToken::Node(self.rebuild(value.as_cst(), decls)));
        }

        children.push(NodeOrToken::Token(GreenToken::new(
            SyntaxKind::ParenClose.into(),
            ")",
        )));
        GreenNode::new(SyntaxKind::CallExpr.into(), children)
    }

    /// Whether `node`'s subtree contains anything this promotion changes.
    fn touches(&self, node: &SyntaxNode) -> bool {
        let range = node.text_range();
        range.contains_range(self.scope.text_range())
            || self
                .names
                .keys()
                .any(|lit| range.contains_range(lit.text_range()))
    }
}

fn insertion_scope(lit: &RecordLit, root: &SyntaxNode) -> SyntaxNode {
    lit.as_cst()
        .ancestors()
        .find(|a| matches!(a.kind(), SyntaxKind::Module | SyntaxKind::Root))
        .unwrap_or_else(|| root.clone())
}

fn newline_green() -> GreenToken {
    GreenToken::new(SyntaxKind::Newline.into(), "\n")
}

/// One declaration rendered to source text.
pub(crate) fn render_decl(ty: &GeneratedType) -> String {
    let params: Vec<String> = ty
        .fields
        .iter()
        .map(|(name, ty)| format!("{}: {}", name, ty))
        .collect();
    format!("record {}({})", ty.name, params.join(", "))
}

/// Parse one rendered declaration and take its green node for splicing.
fn decl_green(ty: &GeneratedType) -> Result<GreenNode> {
    let text = render_decl(ty);
    let parsed = crate::parser::parse(&text)?;
    let node = parsed
        .root
        .as_cst()
        .children()
        .next()
        .expect("a rendered declaration always parses to one item");
    Ok(node.green().into_owned())
}
