use crate::ast::{Node, Stmt};
use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
}

impl BlockStmt {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

impl Node for BlockStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()> {
        visitor.visit_block(self)
    }
}
