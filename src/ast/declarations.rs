use crate::ast::{BlockStmt, Node};
use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

/// `int a, b;`
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub type_name: String,
    pub names: Vec<String>,
}

impl Decl {
    pub fn new(type_name: String, names: Vec<String>) -> Self {
        Self { type_name, names }
    }
}

impl Node for Decl {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()> {
        visitor.visit_decl(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
    /// Source text of the default literal, if any.
    pub default_val: Option<String>,
}

impl Parameter {
    pub fn new(type_name: String, name: String, default_val: Option<String>) -> Self {
        Self {
            type_name,
            name,
            default_val,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: BlockStmt,
}

impl FuncDef {
    pub fn new(return_type: String, name: String, params: Vec<Parameter>, body: BlockStmt) -> Self {
        Self {
            return_type,
            name,
            params,
            body,
        }
    }
}

impl Node for FuncDef {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()> {
        visitor.visit_func_def(self)
    }
}
