//! Public API for the SimpleInt expression evaluator.
//!
//! # Example
//!
//! ```
//! use simpleint_core::api::{self, Error};
//! use simpleint_core::evaluator::EvaluatorOptions;
//! use simpleint_core::values::Value;
//!
//! let options = EvaluatorOptions::default();
//! assert_eq!(api::run("2 + 3 * 4", &options).unwrap(), Value::Int(14));
//! assert!(matches!(api::run("1 / 0", &options), Err(Error::Runtime { .. })));
//! ```

pub mod error;

pub use error::{Diagnostic, Error};

use crate::evaluator::{self, EvaluatorOptions};
use crate::values::Value;

/// Evaluate `source`, reporting failures as the public [`Error`] type.
pub fn run(source: &str, options: &EvaluatorOptions) -> Result<Value, Error> {
    evaluator::evaluate_with_options(source, options.clone())
        .map_err(|err| Error::from_eval(&err, source))
}
