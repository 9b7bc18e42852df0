use crate::utils::config::errors::FORMAT_ERROR;
use crate::utils::errors::{MinicError, MinicResult};

/// Helper function for writing formatted strings to a buffer
/// Used by the AST printer and the token dump
pub fn write_line(buf: &mut String, args: std::fmt::Arguments) -> MinicResult<()> {
    use std::fmt::Write;
    buf.write_fmt(args)
        .map_err(|_| MinicError::OutputError(FORMAT_ERROR.to_string()))
}
