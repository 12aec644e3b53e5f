//! Shared harness for the integration tests.
//!
//! Each `test_case!` expands to one `#[test]` that runs the input through
//! [`simpleint::run`] with default options and checks one of:
//!
//! - `value:` the exact [`Value`] produced
//! - `approx:` a float result within [`TOLERANCE`]
//! - `display:` the printed form of the result
//! - `error:` the diagnostic code of the failure (`R001` for depth limits)

#![allow(dead_code)]

use once_cell::sync::Lazy;
use simpleint::{Error, EvaluatorOptions, Value};

pub const TOLERANCE: f64 = 1e-9;

pub static OPTIONS: Lazy<EvaluatorOptions> = Lazy::new(EvaluatorOptions::default);

pub fn eval(input: &str) -> Result<Value, Error> {
    simpleint::run(input, &OPTIONS)
}

/// Diagnostic code of an error, with resource limits mapped to `R001`.
pub fn error_code(error: &Error) -> &str {
    match error {
        Error::ResourceExceeded(_) => "R001",
        _ => error
            .diagnostic()
            .and_then(|diag| diag.code.as_deref())
            .unwrap_or("<none>"),
    }
}

#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $expected:expr $(,)?) => {
        #[test]
        fn $name() {
            let value = cases::eval($input)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e));
            pretty_assertions::assert_eq!(value, $expected);
        }
    };
    ($name:ident, input: $input:expr, approx: $expected:expr $(,)?) => {
        #[test]
        fn $name() {
            let value = cases::eval($input)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e));
            let actual = value
                .as_float()
                .unwrap_or_else(|| panic!("{:?} should be a float, got {:?}", $input, value));
            let expected: f64 = $expected;
            assert!(
                (actual - expected).abs() < cases::TOLERANCE,
                "{:?}: expected {}, got {}",
                $input,
                expected,
                actual
            );
        }
    };
    ($name:ident, input: $input:expr, display: $expected:expr $(,)?) => {
        #[test]
        fn $name() {
            let value = cases::eval($input)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e));
            pretty_assertions::assert_eq!(value.to_string(), $expected);
        }
    };
    ($name:ident, input: $input:expr, error: $code:expr $(,)?) => {
        #[test]
        fn $name() {
            match cases::eval($input) {
                Ok(value) => panic!("{:?} should fail, got {}", $input, value),
                Err(e) => pretty_assertions::assert_eq!(cases::error_code(&e), $code, "{}", e),
            }
        }
    };
}
