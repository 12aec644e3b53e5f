//! Lexer, evaluator and value model for SimpleInt expressions.
//!
//! Most callers only need [`api::run`] or [`evaluator::evaluate`]; the lexer
//! is public for tooling that wants the raw token stream.

pub mod api;
pub mod evaluator;
pub mod lexer;
pub mod stdlib;
pub mod values;

pub use api::{Diagnostic, Error};
pub use evaluator::{EvalError, EvaluatorOptions, evaluate};
pub use values::Value;
