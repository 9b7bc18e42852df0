use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::lexer::{is_delimiter, is_keyword, is_operator, is_operator_char, is_space};
use crate::LineNumber;
use std::{iter::Peekable, str::Chars};

/// Hand-written scanner. Never fails: characters it cannot classify come
/// out as `TokenKind::Error` tokens and the parser decides what to do.
/// Scanning is per `char` with ASCII-only classification, so a non-ASCII
/// character becomes a single Error token.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: LineNumber,
}

impl<'a> Lexer<'a> {
    pub fn new(file_content: &'a str) -> Self {
        Self {
            chars: file_content.chars().peekable(),
            state: LineNumber::default(),
        }
    }

    pub fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(&ch) = self.chars.peek() {
            if is_space(ch) {
                self.advance();
                continue;
            }
            if ch == '/' && matches!(self.peek_second(), Some('/') | Some('*')) {
                self.scan_comment();
                continue;
            }
            let line = self.state.line;
            let token = if ch.is_ascii_alphabetic() || ch == '_' {
                self.scan_identifier(line)
            } else if ch.is_ascii_digit() {
                self.scan_number(line)
            } else if is_delimiter(ch) && !self.starts_two_char_operator(ch) {
                self.scan_delimiter(line)
            } else if is_operator_char(ch) {
                self.scan_operator(line)
            } else {
                self.scan_error(line)
            };
            tokens.push(token);
        }
        tokens.push(Token::end_of_input(self.state.line));
        tokens
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch == Some('\n') {
            self.state.line += 1;
        }
        ch
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next()
    }

    // `:` is a delimiter on its own but `:=` must still munch as one operator.
    fn starts_two_char_operator(&self, ch: char) -> bool {
        match self.peek_second() {
            Some(next) => is_operator(&format!("{}{}", ch, next)),
            None => false,
        }
    }

    /// Skips a `//` or `/*` comment. An unterminated block comment swallows
    /// the rest of the input without complaint.
    fn scan_comment(&mut self) {
        self.advance(); // Consume '/'
        match self.advance() {
            Some('/') => {
                while let Some(&ch) = self.chars.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }
            }
            Some('*') => {
                while let Some(ch) = self.advance() {
                    if ch == '*' && self.chars.peek() == Some(&'/') {
                        self.advance();
                        return;
                    }
                }
            }
            _ => {}
        }
    }

    fn scan_identifier(&mut self, line: usize) -> Token {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        self.keyword_or_identifier(identifier, line)
    }

    fn keyword_or_identifier(&self, identifier: String, line: usize) -> Token {
        if is_keyword(&identifier) {
            Token::new(TokenKind::Keyword, identifier, line)
        } else {
            Token::new(TokenKind::Identifier, identifier, line)
        }
    }

    /// Digits with at most one `.`; a second `.` ends the number and is
    /// scanned again as its own token.
    fn scan_number(&mut self, line: usize) -> Token {
        let mut number_str = String::new();
        let mut has_dot = false;
        while let Some(&ch) = self.chars.peek() {
            if ch == '.' {
                if has_dot {
                    break;
                }
                has_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            number_str.push(ch);
            self.advance();
        }
        let kind = if has_dot { TokenKind::Float } else { TokenKind::Integer };
        Token::new(kind, number_str, line)
    }

    fn scan_delimiter(&mut self, line: usize) -> Token {
        let ch = self.advance().unwrap_or_default();
        Token::new(TokenKind::Delimiter, ch.to_string(), line)
    }

    /// Maximal munch: two-character operator first, then the single character.
    fn scan_operator(&mut self, line: usize) -> Token {
        let first = self.advance().unwrap_or_default();
        if let Some(&second) = self.chars.peek() {
            let pair = format!("{}{}", first, second);
            if is_operator(&pair) {
                self.advance();
                return Token::new(TokenKind::Operator, pair, line);
            }
        }
        let single = first.to_string();
        if is_operator(&single) {
            Token::new(TokenKind::Operator, single, line)
        } else {
            Token::new(TokenKind::Error, single, line)
        }
    }

    fn scan_error(&mut self, line: usize) -> Token {
        let ch = self.advance().unwrap_or_default();
        Token::new(TokenKind::Error, ch.to_string(), line)
    }
}

// Convenience function for the common one-shot case
pub fn tokenize(file_content: &str) -> Vec<Token> {
    Lexer::new(file_content).scan()
}
