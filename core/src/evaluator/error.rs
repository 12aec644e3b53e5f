//! Evaluation errors.
//!
//! Every error aborts the evaluation immediately; there are no partial
//! results.
//!
//! # Error Categories
//!
//! - **Input errors**: the text is not a valid expression (`Lexical`,
//!   `Syntax`).
//! - **Runtime errors**: the expression is well-formed but an operation has
//!   no value (`Type`, `Domain`, `DivisionByZero`, `Overflow`).
//! - **Resource exceeded errors**: nesting deeper than the configured limit.

use thiserror::Error;

use crate::api::Diagnostic;
use crate::lexer::{LexError, Span};
use crate::values::Value;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Unrecognised character or malformed multi-character literal.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// Token does not fit the grammar at this point.
    #[error("Expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        span: Span,
    },

    /// A boolean used where a number is required, or an invalid comparison.
    #[error("Cannot apply '{operator}' to {found}")]
    Type {
        operator: &'static str,
        found: String,
        span: Span,
    },

    /// Function or operator applied outside its domain.
    #[error("{function} is undefined for {value}")]
    Domain {
        function: &'static str,
        value: Value,
        span: Span,
    },

    /// Division or modulo by zero (integer or float).
    #[error("Division by zero")]
    DivisionByZero { span: Span },

    /// Integer result outside the 64-bit range.
    #[error("Integer overflow in '{operator}'")]
    Overflow { operator: &'static str, span: Span },

    /// Expression nested deeper than the evaluator allows.
    #[error("Expression nesting depth exceeds maximum of {max_depth}")]
    DepthExceeded { max_depth: usize, span: Span },
}

impl EvalError {
    /// Location of the error in the source.
    pub fn span(&self) -> &Span {
        match self {
            EvalError::Lexical(err) => &err.span,
            EvalError::Syntax { span, .. }
            | EvalError::Type { span, .. }
            | EvalError::Domain { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::Overflow { span, .. }
            | EvalError::DepthExceeded { span, .. } => span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EvalError::Lexical(err) => err.code(),
            EvalError::Syntax { .. } => "P001",
            EvalError::Type { .. } => "E001",
            EvalError::Domain { .. } => "E002",
            EvalError::DivisionByZero { .. } => "E003",
            EvalError::Overflow { .. } => "E004",
            EvalError::DepthExceeded { .. } => "R001",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            EvalError::Lexical(err) => err.help(),
            EvalError::Syntax { .. } | EvalError::DivisionByZero { .. } => None,
            EvalError::Type { .. } => Some(
                "Comparison results can only be compared with '==' or '!='".to_string(),
            ),
            EvalError::Domain { function, .. } => match *function {
                "sqrt" => Some("sqrt requires a non-negative argument".to_string()),
                "log2" | "log10" => Some("Logarithms require a positive argument".to_string()),
                _ => None,
            },
            EvalError::Overflow { .. } => Some(format!(
                "Integers are limited to the range {}..={}",
                i64::MIN,
                i64::MAX
            )),
            EvalError::DepthExceeded { .. } => {
                Some("Reduce nesting or simplify the expression".to_string())
            }
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: self.to_string(),
            span: self.span().clone(),
            help: self.help(),
            code: Some(self.code().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexErrorKind;

    #[test]
    fn test_syntax_error_to_diagnostic() {
        let error = EvalError::Syntax {
            expected: "')'".to_string(),
            found: "end of input".to_string(),
            span: Span::new(10, 10),
        };

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.message, "Expected ')', found end of input");
        assert_eq!(diagnostic.span, Span::new(10, 10));
        assert_eq!(diagnostic.code, Some("P001".to_string()));
    }

    #[test]
    fn test_lexical_error_is_transparent() {
        let error = EvalError::from(LexError::new(
            LexErrorKind::IncompleteOperator('='),
            Span::new(0, 1),
        ));
        assert_eq!(error.to_string(), "Expected '=' after '='");
        assert_eq!(error.code(), "L003");
        assert_eq!(
            error.to_diagnostic().help,
            Some("Did you mean '=='?".to_string())
        );
    }

    #[test]
    fn test_domain_error_message() {
        let error = EvalError::Domain {
            function: "sqrt",
            value: Value::Int(-1),
            span: Span::new(5, 7),
        };
        assert_eq!(error.to_string(), "sqrt is undefined for -1");
        assert_eq!(error.span(), &Span::new(5, 7));
        assert!(error.to_diagnostic().help.is_some());
    }
}
