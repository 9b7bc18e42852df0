use crate::utils::config::errors::END_OF_INPUT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    Operator,
    Delimiter,
    EndOfInput,
    Error,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line the token starts on.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn end_of_input(line: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", line)
    }

    /// True if the token has `kind` and, when `lexeme` is given, that exact text.
    pub fn is(&self, kind: TokenKind, lexeme: Option<&str>) -> bool {
        self.kind == kind && lexeme.map_or(true, |l| self.lexeme == l)
    }

    pub fn is_delimiter(&self, lexeme: &str) -> bool {
        self.is(TokenKind::Delimiter, Some(lexeme))
    }

    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.is(TokenKind::Keyword, Some(lexeme))
    }

    pub fn is_operator(&self, lexeme: &str) -> bool {
        self.is(TokenKind::Operator, Some(lexeme))
    }

    /// Text used in error messages for what was actually found.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => END_OF_INPUT.to_string(),
            _ => self.lexeme.clone(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' @{}", self.kind, self.lexeme, self.line)
    }
}
