// Abstract Syntax Tree definitions for the minic front end.
// Every child is owned by exactly one parent; nodes are never shared.

mod traits;
pub use traits::Node;

// AST node modules
mod program;
mod block;
mod declarations;
mod statements;
mod expressions;
mod io;

pub use program::Program;
pub use block::BlockStmt;
pub use declarations::{Decl, FuncDef, Parameter};
pub use statements::{ExprStmt, IfStmt, Stmt, WhileStmt};
pub use expressions::{BinaryExpr, Expr, Ident, Literal};
pub use io::{ReadStmt, WriteStmt};
