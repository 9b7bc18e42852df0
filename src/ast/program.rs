use crate::ast::{Decl, FuncDef, Node, Stmt};
use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

/// Top-level items bucketed by category. Source order is kept inside each
/// bucket but not across them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: Vec<FuncDef>,
    pub decls: Vec<Decl>,
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.decls.is_empty() && self.stmts.is_empty()
    }
}

impl Node for Program {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()> {
        visitor.visit_program(self)
    }
}
