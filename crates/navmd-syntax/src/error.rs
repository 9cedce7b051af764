//! Parse error types.

/// Errors produced while tokenizing or parsing a code sample.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated string literal on line {line}")]
    UnterminatedString { line: usize },

    #[error("unterminated template literal starting on line {line}")]
    UnterminatedTemplate { line: usize },

    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment { line: usize },
}
