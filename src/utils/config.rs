// Lexer lookup tables
pub mod lexer {
    use lazy_static::lazy_static;
    use std::collections::HashSet;

    // Characters that may start an operator token
    pub const OPERATOR_CHARS: &str = "+-*/=!<>&|:";

    lazy_static! {
        pub static ref KEYWORDS: HashSet<&'static str> = [
            "if", "else", "while", "int", "bool", "read", "write", "then", "do", "function",
        ]
        .iter()
        .copied()
        .collect();

        pub static ref OPERATORS: HashSet<&'static str> = [
            "+", "-", "*", "/", "=", ":=", "==", "!=", "<", "<=", ">", ">=", "&&", "||", "!",
        ]
        .iter()
        .copied()
        .collect();

        pub static ref DELIMITERS: HashSet<char> =
            [';', ',', '(', ')', '{', '}', ':'].iter().copied().collect();
    }

    pub fn is_keyword(lexeme: &str) -> bool {
        KEYWORDS.contains(lexeme)
    }

    pub fn is_operator(lexeme: &str) -> bool {
        OPERATORS.contains(lexeme)
    }

    pub fn is_delimiter(ch: char) -> bool {
        DELIMITERS.contains(&ch)
    }

    pub fn is_operator_char(ch: char) -> bool {
        OPERATOR_CHARS.contains(ch)
    }

    /// Whitespace as classified by C's `isspace` in the "C" locale.
    pub fn is_space(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn colon_is_both_delimiter_and_operator_start() {
            assert!(is_delimiter(':'));
            assert!(is_operator_char(':'));
            assert!(!is_operator(":"));
            assert!(is_operator(":="));
        }

        #[test]
        fn lone_ampersand_and_pipe_are_not_operators() {
            assert!(is_operator_char('&'));
            assert!(!is_operator("&"));
            assert!(!is_operator("|"));
            assert!(is_operator("&&"));
            assert!(is_operator("||"));
        }

        #[test]
        fn vertical_tab_and_form_feed_are_space() {
            assert!(is_space('\x0B'));
            assert!(is_space('\x0C'));
            assert!(!is_space('\u{a0}'));
        }
    }
}

// Type keywords accepted by declarations, parameters and function definitions
pub mod parser {
    pub const TYPE_KEYWORDS: &[&str] = &["int", "bool"];

    pub fn is_type_keyword(lexeme: &str) -> bool {
        TYPE_KEYWORDS.contains(&lexeme)
    }

    /// Literal the parser puts on the left of `-` when desugaring unary minus.
    pub const UNARY_MINUS_ZERO: &str = "0";

    /// Deepest statement or expression nesting accepted before the parser
    /// reports a syntax error instead of recursing further.
    pub const MAX_NESTING_DEPTH: usize = 200;
}

// AST trace rendering
pub mod printer {
    pub const INDENT: &str = "  ";
}

// Batch driver defaults
pub mod driver {
    pub const DEFAULT_INPUT_DIR: &str = "./IO/testCases/";
    pub const DEFAULT_OUTPUT_DIR: &str = "./IO/output/";
    pub const SYNTAX_ERROR_PREFIX: &str = "Syntax analysis error: ";
}

// Error messages and debugging
pub mod errors {
    pub const FORMAT_ERROR: &str = "fmt error";
    pub const END_OF_INPUT: &str = "end of input";
}
