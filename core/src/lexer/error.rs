//! Lexical errors.

use thiserror::Error;

use super::token::Span;

/// Lexical error with the location of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Specific kinds of lexical errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// Character that starts no token.
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),

    /// Word that is not one of the known function names.
    #[error("Unknown function '{0}'")]
    UnknownKeyword(String),

    /// `=` or `!` not followed by `=`.
    #[error("Expected '=' after '{0}'")]
    IncompleteOperator(char),

    /// Integer literal that does not fit in 64 bits.
    #[error("Integer literal {0} is too large")]
    IntegerTooLarge(String),
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Diagnostic code for this kind of error.
    pub fn code(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => "L001",
            LexErrorKind::UnknownKeyword(_) => "L002",
            LexErrorKind::IncompleteOperator(_) => "L003",
            LexErrorKind::IntegerTooLarge(_) => "L004",
        }
    }

    pub fn help(&self) -> Option<String> {
        match &self.kind {
            LexErrorKind::UnexpectedChar(_) => None,
            LexErrorKind::UnknownKeyword(_) => {
                Some("Available functions are sqrt, log2 and log10".to_string())
            }
            LexErrorKind::IncompleteOperator(c) => Some(format!("Did you mean '{}='?", c)),
            LexErrorKind::IntegerTooLarge(_) => Some(format!(
                "Integers are limited to the range {}..={}",
                i64::MIN,
                i64::MAX
            )),
        }
    }
}
