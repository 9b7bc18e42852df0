use crate::ast::{BlockStmt, Expr, Node, ReadStmt, WriteStmt};
use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(ExprStmt),
    If(IfStmt),
    While(WhileStmt),
    Block(BlockStmt),
    Read(ReadStmt),
    Write(WriteStmt),
}

impl Node for Stmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()> {
        match self {
            Stmt::Expr(stmt) => visitor.visit_expr_stmt(stmt),
            Stmt::If(stmt) => visitor.visit_if(stmt),
            Stmt::While(stmt) => visitor.visit_while(stmt),
            Stmt::Block(block) => visitor.visit_block(block),
            Stmt::Read(stmt) => visitor.visit_read(stmt),
            Stmt::Write(stmt) => visitor.visit_write(stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
}

impl ExprStmt {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }

    /// `target op value` where `op` is `=` or `:=`.
    pub fn assignment(op: &str, target: String, value: Expr) -> Self {
        Self::new(Expr::binary(op, Expr::identifier(target), value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl IfStmt {
    pub fn new(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Self {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

impl WhileStmt {
    pub fn new(condition: Expr, body: Stmt) -> Self {
        Self {
            condition,
            body: Box::new(body),
        }
    }
}
