//! Runtime values produced by the evaluator.

mod value;

pub use value::Value;

#[cfg(test)]
mod value_test;
