use std::{fs, path::Path};

pub mod ast;
pub mod driver;
pub mod frontend;
pub mod node_counter;
pub mod printer;
pub mod utils;
pub mod visiters;

pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::ast::Program;
use crate::utils::errors::{MinicError, MinicResult};

/// Reads a source file as a byte stream. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD, which the lexer turns into an Error token.
pub fn read(filename: &Path) -> MinicResult<String> {
    if !filename.is_file() {
        return Err(MinicError::FileReadError(format!(
            "{} is not a readable file",
            filename.display()
        )));
    }
    let bytes = fs::read(filename)
        .map_err(|e| MinicError::FileReadError(format!("{}: {}", filename.display(), e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Tokenize and parse one source unit.
pub fn parse_source(source: &str) -> MinicResult<Program> {
    let tokens = frontend::tokenize(source);
    frontend::parser::parse(&tokens)
}
