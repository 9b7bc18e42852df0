use std::fmt;
use std::io;

#[derive(Debug)]
pub enum MinicError {
    // File and I/O errors
    FileReadError(String),
    FileWriteError(String),
    IoError(io::Error),

    // Parsing errors
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },

    // Driver errors
    InvalidPattern(String),
    OutputError(String),
    CompilationError {
        stage: String,
        message: String,
    },
}

impl MinicError {
    /// Create a syntax error
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        MinicError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Create a compilation error for a specific stage
    pub fn compilation_error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        MinicError::CompilationError {
            stage: stage.into(),
            message: message.into(),
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, MinicError::SyntaxError { .. })
    }
}

impl fmt::Display for MinicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinicError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            MinicError::FileWriteError(msg) => write!(f, "File write error: {}", msg),
            MinicError::IoError(err) => write!(f, "I/O error: {}", err),

            MinicError::SyntaxError { expected, found, line } => {
                write!(f, "Syntax error at line {}: expected '{}', found '{}'", line, expected, found)
            }

            MinicError::InvalidPattern(msg) => write!(f, "Invalid file pattern: {}", msg),
            MinicError::OutputError(msg) => write!(f, "Output error: {}", msg),
            MinicError::CompilationError { stage, message } => {
                write!(f, "Compilation error in {}: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for MinicError {}

// Conversion implementations for common error types
impl From<io::Error> for MinicError {
    fn from(err: io::Error) -> Self {
        MinicError::IoError(err)
    }
}

impl From<regex::Error> for MinicError {
    fn from(err: regex::Error) -> Self {
        MinicError::InvalidPattern(err.to_string())
    }
}

// Type alias for Result with MinicError
pub type MinicResult<T> = Result<T, MinicError>;
