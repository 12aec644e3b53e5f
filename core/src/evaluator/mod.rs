//! Recursive-descent evaluator for SimpleInt expressions.
//!
//! Parsing and evaluation are fused: the evaluator pulls tokens from the
//! [`Lexer`](crate::lexer::Lexer) one at a time and computes the value of each
//! grammar rule as soon as it has been recognised.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed input, overflow and deep nesting all surface as
//!   [`EvalError`]
//! - **Stack-safe**: depth tracking bounds recursion on deeply nested input
//! - **One pass**: every operand is evaluated exactly once
//!
//! ## Example
//!
//! ```
//! use simpleint_core::evaluator::{self, EvalError};
//! use simpleint_core::values::Value;
//!
//! assert_eq!(evaluator::evaluate("(2 + 3) * 4").unwrap(), Value::Int(20));
//! assert_eq!(evaluator::evaluate("3 > 2").unwrap(), Value::Bool(true));
//! assert!(matches!(
//!     evaluator::evaluate("3 > 2 + 1"),
//!     Err(EvalError::Type { .. })
//! ));
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use eval::Evaluator;
pub use operators::{BinaryOp, ComparisonOp, UnaryOp};

/// Configuration for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting depth of unary operators, parentheses and function
    /// calls.
    ///
    /// Default: 128. Each level costs several stack frames, so this has to
    /// fit a default 2 MiB thread stack.
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Evaluate an expression with default options.
pub fn evaluate(source: &str) -> Result<crate::values::Value, EvalError> {
    evaluate_with_options(source, EvaluatorOptions::default())
}

/// Evaluate an expression with custom options.
///
/// ## Example
///
/// ```
/// use simpleint_core::evaluator::{EvalError, EvaluatorOptions, evaluate_with_options};
///
/// let options = EvaluatorOptions { max_depth: 2 };
/// assert!(evaluate_with_options("(1)", options.clone()).is_ok());
/// assert!(matches!(
///     evaluate_with_options("((1))", options),
///     Err(EvalError::DepthExceeded { .. })
/// ));
/// ```
pub fn evaluate_with_options(
    source: &str,
    options: EvaluatorOptions,
) -> Result<crate::values::Value, EvalError> {
    Evaluator::new(options, source).evaluate()
}
