use crate::ast::{
    BinaryExpr, BlockStmt, Decl, ExprStmt, FuncDef, Ident, IfStmt, Literal, Program, ReadStmt,
    WhileStmt, WriteStmt,
};
use crate::utils::errors::MinicResult;

/// One method per node kind. Implementors drive their own traversal by
/// calling `accept` on the children they care about.
pub trait ASTVisitor {
    fn visit_program(&mut self, program: &Program) -> MinicResult<()>;
    fn visit_func_def(&mut self, func: &FuncDef) -> MinicResult<()>;
    fn visit_decl(&mut self, decl: &Decl) -> MinicResult<()>;
    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> MinicResult<()>;
    fn visit_if(&mut self, stmt: &IfStmt) -> MinicResult<()>;
    fn visit_while(&mut self, stmt: &WhileStmt) -> MinicResult<()>;
    fn visit_block(&mut self, block: &BlockStmt) -> MinicResult<()>;
    fn visit_read(&mut self, stmt: &ReadStmt) -> MinicResult<()>;
    fn visit_write(&mut self, stmt: &WriteStmt) -> MinicResult<()>;
    fn visit_literal(&mut self, literal: &Literal) -> MinicResult<()>;
    fn visit_identifier(&mut self, ident: &Ident) -> MinicResult<()>;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> MinicResult<()>;
}
