use crate::ast::{
    BinaryExpr, BlockStmt, Decl, ExprStmt, FuncDef, Ident, IfStmt, Literal, Node, Program,
    ReadStmt, WhileStmt, WriteStmt,
};
use crate::utils::config::printer::INDENT;
use crate::utils::errors::MinicResult;
use crate::utils::write_line;
use crate::visiters::ASTVisitor;
use std::fmt::Arguments;

/// Renders the indented parse-tree trace, two spaces per level.
#[derive(Default)]
pub struct AstPrinter {
    output: String,
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(program: &Program) -> MinicResult<String> {
        let mut printer = Self::new();
        program.accept(&mut printer)?;
        Ok(printer.into_output())
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn line(&mut self, offset: usize, text: Arguments) -> MinicResult<()> {
        let indent = INDENT.repeat(self.depth + offset);
        write_line(&mut self.output, format_args!("{}{}\n", indent, text))
    }

    fn child(&mut self, offset: usize, node: &dyn Node) -> MinicResult<()> {
        self.depth += offset;
        let result = node.accept(self);
        self.depth -= offset;
        result
    }

    fn section(&mut self, label: &str, nodes: &[&dyn Node]) -> MinicResult<()> {
        if nodes.is_empty() {
            return Ok(());
        }
        self.line(1, format_args!("{}:", label))?;
        for node in nodes {
            self.child(2, *node)?;
        }
        Ok(())
    }
}

impl ASTVisitor for AstPrinter {
    fn visit_program(&mut self, program: &Program) -> MinicResult<()> {
        self.line(0, format_args!("Program"))?;
        let functions: Vec<&dyn Node> = program.functions.iter().map(|f| f as &dyn Node).collect();
        let decls: Vec<&dyn Node> = program.decls.iter().map(|d| d as &dyn Node).collect();
        let stmts: Vec<&dyn Node> = program.stmts.iter().map(|s| s as &dyn Node).collect();
        self.section("Functions", &functions)?;
        self.section("Declarations", &decls)?;
        self.section("Statements", &stmts)
    }

    fn visit_func_def(&mut self, func: &FuncDef) -> MinicResult<()> {
        self.line(0, format_args!("FuncDef: {} {}", func.return_type, func.name))?;
        self.line(1, format_args!("Parameters:"))?;
        for param in &func.params {
            match &param.default_val {
                Some(default) => {
                    self.line(2, format_args!("{} {} = {}", param.type_name, param.name, default))?
                }
                None => self.line(2, format_args!("{} {}", param.type_name, param.name))?,
            }
        }
        self.line(1, format_args!("Body:"))?;
        self.child(2, &func.body)
    }

    fn visit_decl(&mut self, decl: &Decl) -> MinicResult<()> {
        // Every name is followed by a space, including the last one.
        let names: String = decl.names.iter().map(|name| format!("{} ", name)).collect();
        self.line(0, format_args!("Decl: {} {}", decl.type_name, names))
    }

    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> MinicResult<()> {
        self.line(0, format_args!("ExprStmt:"))?;
        self.child(1, &stmt.expr)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> MinicResult<()> {
        self.line(0, format_args!("IfStmt:"))?;
        self.line(1, format_args!("Condition:"))?;
        self.child(2, &stmt.condition)?;
        self.line(1, format_args!("Then:"))?;
        self.child(2, &*stmt.then_branch)?;
        if let Some(else_branch) = &stmt.else_branch {
            self.line(1, format_args!("Else:"))?;
            self.child(2, &**else_branch)?;
        }
        Ok(())
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> MinicResult<()> {
        self.line(0, format_args!("WhileStmt:"))?;
        self.line(1, format_args!("Condition:"))?;
        self.child(2, &stmt.condition)?;
        self.line(1, format_args!("Body:"))?;
        self.child(2, &*stmt.body)
    }

    fn visit_block(&mut self, block: &BlockStmt) -> MinicResult<()> {
        self.line(0, format_args!("BlockStmt:"))?;
        for stmt in &block.stmts {
            self.child(1, stmt)?;
        }
        Ok(())
    }

    fn visit_read(&mut self, stmt: &ReadStmt) -> MinicResult<()> {
        self.line(0, format_args!("ReadStmt: {}", stmt.var_name))
    }

    fn visit_write(&mut self, stmt: &WriteStmt) -> MinicResult<()> {
        self.line(0, format_args!("WriteStmt: {}", stmt.var_name))
    }

    fn visit_literal(&mut self, literal: &Literal) -> MinicResult<()> {
        self.line(0, format_args!("Literal: {}", literal.value))
    }

    fn visit_identifier(&mut self, ident: &Ident) -> MinicResult<()> {
        self.line(0, format_args!("Identifier: {}", ident.name))
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> MinicResult<()> {
        self.line(0, format_args!("BinaryExpr: {}", expr.op))?;
        self.child(1, &*expr.left)?;
        self.child(1, &*expr.right)
    }
}

pub fn render(program: &Program) -> MinicResult<String> {
    AstPrinter::render(program)
}
