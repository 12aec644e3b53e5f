//! Tests for Value accessors and Display.

use crate::values::Value;
use pretty_assertions::assert_eq;

#[test]
fn test_display_int() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::int(-100).to_string(), "-100");
    assert_eq!(Value::int(0).to_string(), "0");
}

#[test]
fn test_display_float_with_decimal() {
    assert_eq!(Value::float(3.25).to_string(), "3.25");
    assert_eq!(Value::float(-0.5).to_string(), "-0.5");
}

#[test]
fn test_display_float_whole_number() {
    // Whole floats keep a fractional part so they don't read as integers.
    assert_eq!(Value::float(4.0).to_string(), "4.0");
    assert_eq!(Value::float(-2.0).to_string(), "-2.0");
}

#[test]
fn test_display_float_special() {
    assert_eq!(Value::float(f64::NAN).to_string(), "nan");
    assert_eq!(Value::float(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-inf");
}

#[test]
fn test_display_bool() {
    assert_eq!(Value::bool(true).to_string(), "TRUE");
    assert_eq!(Value::bool(false).to_string(), "FALSE");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::int(7).as_int(), Some(7));
    assert_eq!(Value::int(7).as_float(), None);
    assert_eq!(Value::float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::bool(true).as_bool(), Some(true));
    assert_eq!(Value::bool(true).as_int(), None);
}

#[test]
fn test_to_f64_rejects_bool() {
    assert_eq!(Value::int(3).to_f64(), Some(3.0));
    assert_eq!(Value::float(0.25).to_f64(), Some(0.25));
    assert_eq!(Value::bool(false).to_f64(), None);
    assert!(!Value::bool(false).is_numeric());
}

#[test]
fn test_type_name() {
    assert_eq!(Value::from(1i64).type_name(), "Int");
    assert_eq!(Value::from(1.0f64).type_name(), "Float");
    assert_eq!(Value::from(true).type_name(), "Bool");
}
