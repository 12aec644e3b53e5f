//! SimpleInt - a small integer expression evaluator
//!
//! # Overview
//!
//! SimpleInt evaluates one-line arithmetic and comparison expressions:
//!
//! - integer literals with `+ - * / % ^` and unary signs
//! - the built-in functions `sqrt`, `log2` and `log10`
//! - relational operators producing `TRUE` / `FALSE`
//!
//! Parsing and evaluation happen in a single pass; there is no syntax tree.
//!
//! # Quick Start
//!
//! ```
//! use simpleint::{EvaluatorOptions, Value, run};
//!
//! let options = EvaluatorOptions::default();
//! assert_eq!(run("(2 + 3) * 4", &options).unwrap(), Value::Int(20));
//! assert_eq!(run("10 / 4", &options).unwrap(), Value::Float(2.5));
//! assert_eq!(run("3 > 2", &options).unwrap().to_string(), "TRUE");
//! ```
//!
//! # Errors
//!
//! Failures are reported as [`Error`], which keeps the source text and a
//! [`Diagnostic`] pointing at the offending span. Use [`render_error`] (or one
//! of its variants) to print it with a source snippet:
//!
//! ```
//! use simpleint::{EvaluatorOptions, render_error_to_string_no_color, run};
//!
//! let err = run("sqrt(-4)", &EvaluatorOptions::default()).unwrap_err();
//! let report = render_error_to_string_no_color(&err);
//! assert!(report.contains("sqrt(-4)"));
//! assert!(report.contains("E002"));
//! ```

mod error_renderer;

// Re-export public API from simpleint_core
pub use simpleint_core::api::{Diagnostic, Error, run};

// Re-export commonly used types and values
pub use simpleint_core::evaluator::{self, EvaluatorOptions, evaluate, evaluate_with_options};
pub use simpleint_core::lexer::{self, LexError, LexErrorKind, Lexer, Span, Token, TokenKind, tokenize};
pub use simpleint_core::stdlib;
pub use simpleint_core::values::{self, Value};

// Re-export errors
pub use simpleint_core::evaluator::EvalError;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
