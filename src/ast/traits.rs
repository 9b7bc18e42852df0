/*
*                    minic -- parse tree front end.
*
* program    = "{" { item } "}" | { item } ;
* item       = funcdef | decl | statement ;
* funcdef    = type ident "(" [ param { ";" param } ] ")" block ;
* param      = type ident [ "=" ( integer | float ) ] ;
* decl       = type ident { "," ident } ";" ;
* type       = "int" | "bool" ;
* statement  = "if" ident "then" statement [ "else" statement ]
*            | "while" ident "do" statement
*            | "read" ident ";"
*            | "write" ident { "," ident } ";"
*            | block
*            | ident ( "=" | ":=" ) expression ";" ;
* block      = "{" { statement } "}" ;
* expression = term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = "-" factor | integer | float | ident | "(" expression ")" ;
*/

use crate::utils::errors::MinicResult;
use crate::visiters::ASTVisitor;

pub trait Node {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> MinicResult<()>;
}
