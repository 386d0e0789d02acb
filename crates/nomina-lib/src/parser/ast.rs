//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Module, Module);
ast_node!(RecordDecl, RecordDecl);
ast_node!(Param, Param);
ast_node!(TypeExpr, TypeExpr);
ast_node!(LetDecl, LetDecl);
ast_node!(RecordLit, RecordLit);
ast_node!(FieldInit, FieldInit);
ast_node!(ListLit, ListLit);
ast_node!(Lambda, Lambda);
ast_node!(CallExpr, CallExpr);
ast_node!(MemberExpr, MemberExpr);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(ParenExpr, ParenExpr);
ast_node!(NameRef, NameRef);
ast_node!(Literal, Literal);

/// Top-level or module-level item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Module(Module),
    RecordDecl(RecordDecl),
    LetDecl(LetDecl),
}

impl Item {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Module => Module::cast(node).map(Item::Module),
            SyntaxKind::RecordDecl => RecordDecl::cast(node).map(Item::RecordDecl),
            SyntaxKind::LetDecl => LetDecl::cast(node).map(Item::LetDecl),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Item::Module(n) => n.as_cst(),
            Item::RecordDecl(n) => n.as_cst(),
            Item::LetDecl(n) => n.as_cst(),
        }
    }
}

/// Expression: any value-producing node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    RecordLit(RecordLit),
    ListLit(ListLit),
    Lambda(Lambda),
    Call(CallExpr),
    Member(MemberExpr),
    Binary(BinaryExpr),
    Paren(ParenExpr),
    NameRef(NameRef),
    Literal(Literal),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::RecordLit => RecordLit::cast(node).map(Expr::RecordLit),
            SyntaxKind::ListLit => ListLit::cast(node).map(Expr::ListLit),
            SyntaxKind::Lambda => Lambda::cast(node).map(Expr::Lambda),
            SyntaxKind::CallExpr => CallExpr::cast(node).map(Expr::Call),
            SyntaxKind::MemberExpr => MemberExpr::cast(node).map(Expr::Member),
            SyntaxKind::BinaryExpr => BinaryExpr::cast(node).map(Expr::Binary),
            SyntaxKind::ParenExpr => ParenExpr::cast(node).map(Expr::Paren),
            SyntaxKind::NameRef => NameRef::cast(node).map(Expr::NameRef),
            SyntaxKind::Literal => Literal::cast(node).map(Expr::Literal),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::RecordLit(n) => n.as_cst(),
            Expr::ListLit(n) => n.as_cst(),
            Expr::Lambda(n) => n.as_cst(),
            Expr::Call(n) => n.as_cst(),
            Expr::Member(n) => n.as_cst(),
            Expr::Binary(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::NameRef(n) => n.as_cst(),
            Expr::Literal(n) => n.as_cst(),
        }
    }
}

fn first_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

impl Root {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }
}

impl Module {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }
}

impl RecordDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn ty(&self) -> Option<TypeExpr> {
        self.0.children().find_map(TypeExpr::cast)
    }
}

impl TypeExpr {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn args(&self) -> impl Iterator<Item = TypeExpr> + '_ {
        self.0.children().filter_map(TypeExpr::cast)
    }
}

impl LetDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl RecordLit {
    pub fn fields(&self) -> impl Iterator<Item = FieldInit> + '_ {
        self.0.children().filter_map(FieldInit::cast)
    }
}

impl FieldInit {
    /// The explicit `name:` token, if any. A shorthand field has none -
    /// its value's identifier sits inside a child node, not here.
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl ListLit {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl Lambda {
    pub fn param(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }

    pub fn body(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl CallExpr {
    pub fn callee(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast).skip(1)
    }
}

impl MemberExpr {
    pub fn target(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn member(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::Plus | SyntaxKind::Minus | SyntaxKind::Star | SyntaxKind::Slash
                )
            })
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Ident)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| !t.kind().is_trivia())
    }
}
