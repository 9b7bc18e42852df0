use crate::ast::{
    BinaryExpr, BlockStmt, Decl, ExprStmt, FuncDef, Ident, IfStmt, Literal, Node, Program,
    ReadStmt, WhileStmt, WriteStmt,
};
use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

/// Tallies parse-tree nodes for the `--timing` report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    pub functions: usize,
    pub declarations: usize,
    pub statements: usize,
    pub expressions: usize,
}

impl NodeCounter {
    pub fn count(program: &Program) -> MinicResult<Self> {
        let mut counter = Self::default();
        program.accept(&mut counter)?;
        Ok(counter)
    }

    /// All nodes, the `Program` root included.
    pub fn total(&self) -> usize {
        1 + self.functions + self.declarations + self.statements + self.expressions
    }
}

impl ASTVisitor for NodeCounter {
    fn visit_program(&mut self, program: &Program) -> MinicResult<()> {
        for func in &program.functions {
            func.accept(self)?;
        }
        for decl in &program.decls {
            decl.accept(self)?;
        }
        for stmt in &program.stmts {
            stmt.accept(self)?;
        }
        Ok(())
    }

    fn visit_func_def(&mut self, func: &FuncDef) -> MinicResult<()> {
        self.functions += 1;
        func.body.accept(self)
    }

    fn visit_decl(&mut self, _decl: &Decl) -> MinicResult<()> {
        self.declarations += 1;
        Ok(())
    }

    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> MinicResult<()> {
        self.statements += 1;
        stmt.expr.accept(self)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> MinicResult<()> {
        self.statements += 1;
        stmt.condition.accept(self)?;
        stmt.then_branch.accept(self)?;
        if let Some(else_branch) = &stmt.else_branch {
            else_branch.accept(self)?;
        }
        Ok(())
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> MinicResult<()> {
        self.statements += 1;
        stmt.condition.accept(self)?;
        stmt.body.accept(self)
    }

    fn visit_block(&mut self, block: &BlockStmt) -> MinicResult<()> {
        self.statements += 1;
        for stmt in &block.stmts {
            stmt.accept(self)?;
        }
        Ok(())
    }

    fn visit_read(&mut self, _stmt: &ReadStmt) -> MinicResult<()> {
        self.statements += 1;
        Ok(())
    }

    fn visit_write(&mut self, _stmt: &WriteStmt) -> MinicResult<()> {
        self.statements += 1;
        Ok(())
    }

    fn visit_literal(&mut self, _literal: &Literal) -> MinicResult<()> {
        self.expressions += 1;
        Ok(())
    }

    fn visit_identifier(&mut self, _ident: &Ident) -> MinicResult<()> {
        self.expressions += 1;
        Ok(())
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> MinicResult<()> {
        self.expressions += 1;
        expr.left.accept(self)?;
        expr.right.accept(self)
    }
}
