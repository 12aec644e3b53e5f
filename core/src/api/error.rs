//! Public error types for the SimpleInt API.
//!
//! Internal errors ([`EvalError`](crate::evaluator::EvalError)) are converted
//! to these types at the API boundary. Every variant keeps the source text so
//! callers can render a report without holding on to the input themselves.

use crate::evaluator::EvalError;
use crate::lexer::Span;

use std::fmt;

/// Public error type for all SimpleInt operations.
#[derive(Debug, Clone)]
pub enum Error {
    /// The input could not be tokenized or does not match the grammar.
    Syntax { diagnostic: Diagnostic, source: String },

    /// A well-formed expression failed while computing its value (type
    /// mismatch, domain error, division by zero, overflow).
    Runtime { diagnostic: Diagnostic, source: String },

    /// Resource limits exceeded (nesting depth).
    ResourceExceeded(String),
}

impl Error {
    /// Convert an evaluation error for `source`.
    pub fn from_eval(err: &EvalError, source: &str) -> Self {
        match err {
            EvalError::DepthExceeded { .. } => Error::ResourceExceeded(err.to_string()),
            EvalError::Lexical(_) | EvalError::Syntax { .. } => Error::Syntax {
                diagnostic: err.to_diagnostic(),
                source: source.to_string(),
            },
            _ => Error::Runtime {
                diagnostic: err.to_diagnostic(),
                source: source.to_string(),
            },
        }
    }

    /// The diagnostic, when the error points into the source.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Syntax { diagnostic, .. } | Error::Runtime { diagnostic, .. } => {
                Some(diagnostic)
            }
            Error::ResourceExceeded(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Syntax { diagnostic, .. } => write!(f, "Syntax error: {}", diagnostic.message),
            Error::Runtime { diagnostic, .. } => {
                write!(f, "Runtime error: {}", diagnostic.message)
            }
            Error::ResourceExceeded(msg) => write!(f, "Resource limit exceeded: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// An error message with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "E001") for documentation lookup.
    pub code: Option<String>,
}
