use crate::ast::{
    BlockStmt, Decl, Expr, ExprStmt, FuncDef, IfStmt, Parameter, Program, ReadStmt, Stmt,
    WhileStmt, WriteStmt,
};
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::parser::{is_type_keyword, MAX_NESTING_DEPTH, UNARY_MINUS_ZERO};
use crate::utils::errors::{MinicError, MinicResult};

/// Recursive-descent parser with one token of lookahead (three when telling
/// a function definition from a declaration). Stops at the first error.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    // Returned by `current_token` once `pos` runs past the slice.
    end: Token,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let line = tokens.last().map_or(1, |token| token.line);
        Self {
            tokens,
            pos: 0,
            depth: 0,
            end: Token::end_of_input(line),
        }
    }

    /// Parses a whole source unit, either wrapped in one outer `{ ... }` or
    /// running until end of input. Anything after the closing brace of the
    /// wrapped form is left unread.
    pub fn parse(&mut self) -> MinicResult<Program> {
        let mut program = Program::new();
        if self.current_token().is_delimiter("{") {
            self.expect(TokenKind::Delimiter, Some("{"))?;
            while !self.current_token().is_delimiter("}") {
                self.parse_top_item(&mut program)?;
            }
            self.expect(TokenKind::Delimiter, Some("}"))?;
        } else {
            while self.current_token().kind != TokenKind::EndOfInput {
                self.parse_top_item(&mut program)?;
            }
        }
        Ok(program)
    }

    fn parse_top_item(&mut self, program: &mut Program) -> MinicResult<()> {
        let token = self.current_token();
        if token.kind == TokenKind::Keyword && is_type_keyword(&token.lexeme) {
            if self.looks_like_func_def() {
                program.functions.push(self.parse_func_def()?);
            } else {
                program.decls.push(self.parse_decl()?);
            }
        } else {
            program.stmts.push(self.parse_stmt()?);
        }
        Ok(())
    }

    // type IDENT '(' starts a function definition, anything else after a
    // type keyword is a declaration.
    fn looks_like_func_def(&self) -> bool {
        self.peek_at(1).kind == TokenKind::Identifier && self.peek_at(2).is_delimiter("(")
    }

    /// returnType IDENT ( [param { ; param }] ) block
    pub fn parse_func_def(&mut self) -> MinicResult<FuncDef> {
        let return_type = self.expect_type("return type")?;
        let name = self.expect_ident("function name")?;
        self.expect(TokenKind::Delimiter, Some("("))?;
        let mut params = Vec::new();
        while !self.current_token().is_delimiter(")") {
            params.push(self.parse_parameter()?);
            // Parameters are separated by ';', not ','
            if !self.eat(TokenKind::Delimiter, Some(";")) {
                break;
            }
        }
        self.expect(TokenKind::Delimiter, Some(")"))?;
        if !self.current_token().is_delimiter("{") {
            return Err(self.error_here("block as function body"));
        }
        let body = self.parse_block()?;
        Ok(FuncDef::new(return_type, name, params, body))
    }

    fn parse_parameter(&mut self) -> MinicResult<Parameter> {
        let type_name = self.expect_type("parameter type 'int' or 'bool'")?;
        let name = self.expect_ident("parameter name")?;
        let mut default_val = None;
        if self.eat(TokenKind::Operator, Some("=")) {
            let token = self.current_token();
            match token.kind {
                TokenKind::Integer | TokenKind::Float => {
                    default_val = Some(token.lexeme.clone());
                    self.next();
                }
                _ => return Err(self.error_here("integer or float default value")),
            }
        }
        Ok(Parameter::new(type_name, name, default_val))
    }

    /// type IDENT { , IDENT } ;
    pub fn parse_decl(&mut self) -> MinicResult<Decl> {
        let type_name = self.expect_type("declaration type 'int' or 'bool'")?;
        let mut names = vec![self.expect_ident("variable name")?];
        while self.eat(TokenKind::Delimiter, Some(",")) {
            names.push(self.expect_ident("variable name")?);
        }
        self.expect(TokenKind::Delimiter, Some(";"))?;
        Ok(Decl::new(type_name, names))
    }

    pub fn parse_stmt(&mut self) -> MinicResult<Stmt> {
        self.nested("shallower statement nesting", Self::parse_stmt_at_depth)
    }

    fn parse_stmt_at_depth(&mut self) -> MinicResult<Stmt> {
        let token = self.current_token().clone();
        match token.kind {
            TokenKind::Keyword if token.lexeme == "if" => self.parse_if(),
            TokenKind::Keyword if token.lexeme == "while" => self.parse_while(),
            TokenKind::Keyword if token.lexeme == "read" => self.parse_read(),
            TokenKind::Keyword if token.lexeme == "write" => self.parse_write(),
            TokenKind::Delimiter if token.lexeme == "{" => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Identifier => self.parse_assignment(),
            _ => Err(self.error_here("statement")),
        }
    }

    fn parse_if(&mut self) -> MinicResult<Stmt> {
        self.expect(TokenKind::Keyword, Some("if"))?;
        let condition = Expr::identifier(self.expect_ident("identifier as if condition")?);
        self.expect(TokenKind::Keyword, Some("then"))?;
        let then_branch = self.parse_stmt()?;
        let else_branch = if self.eat(TokenKind::Keyword, Some("else")) {
            Some(self.parse_stmt()?)
        } else {
            None
        };
        Ok(Stmt::If(IfStmt::new(condition, then_branch, else_branch)))
    }

    fn parse_while(&mut self) -> MinicResult<Stmt> {
        self.expect(TokenKind::Keyword, Some("while"))?;
        let condition = Expr::identifier(self.expect_ident("identifier as while condition")?);
        self.expect(TokenKind::Keyword, Some("do"))?;
        let body = self.parse_stmt()?;
        Ok(Stmt::While(WhileStmt::new(condition, body)))
    }

    fn parse_read(&mut self) -> MinicResult<Stmt> {
        self.expect(TokenKind::Keyword, Some("read"))?;
        let var_name = self.expect_ident("identifier after 'read'")?;
        self.expect(TokenKind::Delimiter, Some(";"))?;
        Ok(Stmt::Read(ReadStmt::new(var_name)))
    }

    // Only the first name reaches the tree.
    fn parse_write(&mut self) -> MinicResult<Stmt> {
        self.expect(TokenKind::Keyword, Some("write"))?;
        let var_name = self.expect_ident("identifier after 'write'")?;
        while self.eat(TokenKind::Delimiter, Some(",")) {
            self.expect_ident("identifier after ','")?;
        }
        self.expect(TokenKind::Delimiter, Some(";"))?;
        Ok(Stmt::Write(WriteStmt::new(var_name)))
    }

    pub fn parse_block(&mut self) -> MinicResult<BlockStmt> {
        self.expect(TokenKind::Delimiter, Some("{"))?;
        let mut stmts = Vec::new();
        while !self.current_token().is_delimiter("}") {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::Delimiter, Some("}"))?;
        Ok(BlockStmt::new(stmts))
    }

    /// IDENT ( = | := ) expr ;
    fn parse_assignment(&mut self) -> MinicResult<Stmt> {
        let target = self.expect_ident("identifier")?;
        let op = {
            let token = self.current_token();
            if token.is_operator("=") || token.is_operator(":=") {
                token.lexeme.clone()
            } else {
                return Err(self.error_here("'=' or ':='"));
            }
        };
        self.next();
        let value = self.parse_expr()?;
        self.expect(TokenKind::Delimiter, Some(";"))?;
        Ok(Stmt::Expr(ExprStmt::assignment(&op, target, value)))
    }

    /* Expressions */
    pub fn parse_expr(&mut self) -> MinicResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.eat_operator(&["+", "-"]) {
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> MinicResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.eat_operator(&["*", "/"]) {
            let right = self.parse_factor()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    // `-x` becomes `0 - x`
    fn parse_factor(&mut self) -> MinicResult<Expr> {
        if self.eat(TokenKind::Operator, Some("-")) {
            let operand = self.nested("shallower expression", Self::parse_factor)?;
            return Ok(Expr::binary("-", Expr::literal(UNARY_MINUS_ZERO), operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> MinicResult<Expr> {
        let token = self.current_token().clone();
        match token.kind {
            TokenKind::Integer | TokenKind::Float => {
                self.next();
                Ok(Expr::literal(token.lexeme))
            }
            TokenKind::Identifier => {
                self.next();
                Ok(Expr::identifier(token.lexeme))
            }
            TokenKind::Delimiter if token.lexeme == "(" => {
                self.next();
                let expr = self.nested("shallower expression", Self::parse_expr)?;
                self.expect(TokenKind::Delimiter, Some(")"))?;
                Ok(expr)
            }
            _ => Err(self.error_here("identifier, number or '('")),
        }
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    pub fn current_token(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).unwrap_or(&self.end)
    }

    fn next(&mut self) {
        self.pos += 1;
    }

    /// Advances past the current token if it matches, otherwise fails.
    fn expect(&mut self, kind: TokenKind, lexeme: Option<&str>) -> MinicResult<()> {
        if !self.current_token().is(kind, lexeme) {
            let expected = match lexeme {
                Some(lexeme) => lexeme.to_string(),
                None => kind.to_string(),
            };
            return Err(self.error_here(&expected));
        }
        self.next();
        Ok(())
    }

    /// Advances and returns true if the current token matches, otherwise leaves it alone.
    fn eat(&mut self, kind: TokenKind, lexeme: Option<&str>) -> bool {
        if self.current_token().is(kind, lexeme) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Runs `parse` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(&mut self, what: &str, parse: fn(&mut Self) -> MinicResult<T>) -> MinicResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here(what));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn eat_operator(&mut self, ops: &[&str]) -> Option<String> {
        let token = self.current_token();
        if token.kind == TokenKind::Operator && ops.contains(&token.lexeme.as_str()) {
            let op = token.lexeme.clone();
            self.next();
            Some(op)
        } else {
            None
        }
    }

    fn expect_ident(&mut self, what: &str) -> MinicResult<String> {
        let token = self.current_token();
        if token.kind != TokenKind::Identifier {
            return Err(self.error_here(what));
        }
        let name = token.lexeme.clone();
        self.next();
        Ok(name)
    }

    fn expect_type(&mut self, what: &str) -> MinicResult<String> {
        let token = self.current_token();
        if token.kind != TokenKind::Keyword || !is_type_keyword(&token.lexeme) {
            return Err(self.error_here(what));
        }
        let type_name = token.lexeme.clone();
        self.next();
        Ok(type_name)
    }

    fn error_here(&self, expected: &str) -> MinicError {
        let token = self.current_token();
        MinicError::syntax_error(expected, token.describe(), token.line)
    }
}

// Convenience function for the common one-shot case
pub fn parse(tokens: &[Token]) -> MinicResult<Program> {
    Parser::new(tokens).parse()
}
