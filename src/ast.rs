use crate::lexer::{Token, TokenKind};

/// One traversal method per node variant. Consumers drive the recursion
/// themselves by calling `accept` on child nodes, so new consumers need no
/// changes here.
pub trait Visitor {
    fn visit_constant(&mut self, constant: &Constant);
    fn visit_value_name(&mut self, value_name: &ValueName);
    fn visit_let_binding(&mut self, let_binding: &LetBinding);
    fn visit_expr_constant(&mut self, constant: &Constant);
    fn visit_expr_let(&mut self, expr_let: &ExprLet);
}

/// One of `false`, `true` or `()`, identified by its token kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub kind: TokenKind,
}

impl Constant {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_constant(self);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueName {
    pub token: Token,
}

impl ValueName {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_value_name(self);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetBinding {
    pub name: ValueName,
    pub value: Box<Expr>,
}

impl LetBinding {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_let_binding(self);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprLet {
    pub rec: bool,
    pub binding: LetBinding,
    pub body: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(Constant),
    Let(ExprLet),
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Expr::Constant(constant) => visitor.visit_expr_constant(constant),
            Expr::Let(expr_let) => visitor.visit_expr_let(expr_let),
        }
    }
}
