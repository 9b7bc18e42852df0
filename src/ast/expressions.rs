use crate::ast::Node;
use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Ident),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::new(value.into()))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(Ident::new(name.into()))
    }

    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(op.into(), left, right))
    }
}

impl Node for Expr {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()> {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Identifier(ident) => visitor.visit_identifier(ident),
            Expr::Binary(binary) => visitor.visit_binary(binary),
        }
    }
}

/// Numeric literal, kept as its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// Also carries assignments: `=` and `:=` with an identifier on the left.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(op: String, left: Expr, right: Expr) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
