//! Binary, comparison and unary operator implementations.
//!
//! Every operand is checked before it is combined: a boolean never reaches
//! arithmetic, whichever side of the operator it is on.

use crate::{
    evaluator::EvalError,
    lexer::{Span, TokenKind},
    values::Value,
};

/// Arithmetic operators (`expr` and `term` levels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    /// `+` / `-`, the operators chained by `expr`.
    pub fn additive(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// `*`, `/`, `%`, `^`, the operators chained by `term`.
    pub fn multiplicative(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Mul => Some(BinaryOp::Mul),
            TokenKind::Div => Some(BinaryOp::Div),
            TokenKind::Mod => Some(BinaryOp::Mod),
            TokenKind::Pow => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
        }
    }
}

/// Relational operators (`comparison` level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Ge,
    Gt,
    Le,
    Lt,
    Eq,
    Ne,
}

impl ComparisonOp {
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Ge => Some(ComparisonOp::Ge),
            TokenKind::Gt => Some(ComparisonOp::Gt),
            TokenKind::Le => Some(ComparisonOp::Le),
            TokenKind::Lt => Some(ComparisonOp::Lt),
            TokenKind::Eq => Some(ComparisonOp::Eq),
            TokenKind::Ne => Some(ComparisonOp::Ne),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Ge => ">=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
        }
    }

    fn is_equality(self) -> bool {
        matches!(self, ComparisonOp::Eq | ComparisonOp::Ne)
    }
}

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Pos,
    Neg,
}

impl UnaryOp {
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(UnaryOp::Pos),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
        }
    }
}

/// A value together with the source range it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub value: Value,
    pub span: Span,
}

impl Operand {
    pub fn new(value: Value, span: Span) -> Self {
        Self { value, span }
    }
}

/// Numeric view of an operand once booleans have been ruled out.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn to_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(value) => value == 0,
            Number::Float(value) => value == 0.0,
        }
    }
}

/// Reject booleans as operands of `operator`.
pub(super) fn ensure_numeric(operand: &Operand, operator: &'static str) -> Result<(), EvalError> {
    number(operand, operator).map(|_| ())
}

/// Numeric value of `operand` as `f64`, for the built-in functions.
pub(super) fn to_f64(operand: &Operand, function: &'static str) -> Result<f64, EvalError> {
    number(operand, function).map(Number::to_f64)
}

fn number(operand: &Operand, operator: &'static str) -> Result<Number, EvalError> {
    match operand.value {
        Value::Int(value) => Ok(Number::Int(value)),
        Value::Float(value) => Ok(Number::Float(value)),
        Value::Bool(_) => Err(EvalError::Type {
            operator,
            found: operand.value.type_name().to_string(),
            span: operand.span.clone(),
        }),
    }
}

/// Evaluate an arithmetic operation.
///
/// Integer `+ - * ^` are checked and report overflow; `/` always produces a
/// float; `%` takes the sign of the divisor.
pub(super) fn eval_binary(
    op: BinaryOp,
    left: &Operand,
    right: &Operand,
) -> Result<Value, EvalError> {
    let l = number(left, op.symbol())?;
    let r = number(right, op.symbol())?;
    let span = Span::combine(&left.span, &right.span);

    let overflow = || EvalError::Overflow {
        operator: op.symbol(),
        span: span.clone(),
    };
    let division_by_zero = || EvalError::DivisionByZero {
        span: right.span.clone(),
    };

    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => match (l, r) {
            (Number::Int(a), Number::Int(b)) => {
                let result = match op {
                    BinaryOp::Add => a.checked_add(b),
                    BinaryOp::Sub => a.checked_sub(b),
                    _ => a.checked_mul(b),
                };
                result.map(Value::Int).ok_or_else(overflow)
            }
            _ => {
                let (a, b) = (l.to_f64(), r.to_f64());
                let result = match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    _ => a * b,
                };
                Ok(Value::Float(result))
            }
        },
        BinaryOp::Div => {
            if r.is_zero() {
                return Err(division_by_zero());
            }
            Ok(Value::Float(l.to_f64() / r.to_f64()))
        }
        BinaryOp::Mod => {
            if r.is_zero() {
                return Err(division_by_zero());
            }
            match (l, r) {
                (Number::Int(a), Number::Int(b)) => Ok(Value::Int(floored_rem_int(a, b))),
                _ => Ok(Value::Float(floored_rem_float(l.to_f64(), r.to_f64()))),
            }
        }
        BinaryOp::Pow => eval_pow(l, r).map_err(|err| match err {
            PowError::Overflow => overflow(),
            PowError::ZeroToNegative => division_by_zero(),
            PowError::Domain => EvalError::Domain {
                function: "fractional power",
                value: left.value,
                span: span.clone(),
            },
        }),
    }
}

enum PowError {
    Overflow,
    ZeroToNegative,
    Domain,
}

fn eval_pow(base: Number, exponent: Number) -> Result<Value, PowError> {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            return int_pow(b, e).map(Value::Int).ok_or(PowError::Overflow);
        }
        if b == 0 {
            return Err(PowError::ZeroToNegative);
        }
        // Negative integer exponents promote to float.
    }

    let (b, e) = (base.to_f64(), exponent.to_f64());
    if b == 0.0 && e < 0.0 {
        return Err(PowError::ZeroToNegative);
    }
    if b < 0.0 && e.fract() != 0.0 && e.is_finite() {
        return Err(PowError::Domain);
    }

    let result = b.powf(e);
    if result.is_infinite() && b.is_finite() && e.is_finite() {
        return Err(PowError::Overflow);
    }
    Ok(Value::Float(result))
}

/// `b ^ e` for `e >= 0`. Bases 0, 1 and -1 stay in range for any exponent.
fn int_pow(b: i64, e: i64) -> Option<i64> {
    match b {
        0 => Some(if e == 0 { 1 } else { 0 }),
        1 => Some(1),
        -1 => Some(if e % 2 == 0 { 1 } else { -1 }),
        _ => b.checked_pow(u32::try_from(e).ok()?),
    }
}

/// Integer remainder with the sign of the divisor.
fn floored_rem_int(a: i64, b: i64) -> i64 {
    let rem = a.wrapping_rem(b);
    if rem != 0 && (rem < 0) != (b < 0) {
        rem + b
    } else {
        rem
    }
}

/// Float remainder with the sign of the divisor.
fn floored_rem_float(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}

/// Evaluate a relational operator, producing a boolean.
///
/// Numbers compare numerically. Two booleans support `==` and `!=` only;
/// any other use of a boolean is a type error.
pub(super) fn eval_comparison(
    op: ComparisonOp,
    left: &Operand,
    right: &Operand,
) -> Result<Value, EvalError> {
    let result = match (left.value, right.value) {
        (Value::Bool(a), Value::Bool(b)) if op.is_equality() => compare(op, a, b),
        (Value::Bool(_), _) | (_, Value::Bool(_)) => {
            let offender = if left.value.is_numeric() { right } else { left };
            return Err(EvalError::Type {
                operator: op.symbol(),
                found: format!("{} and {}", left.value.type_name(), right.value.type_name()),
                span: offender.span.clone(),
            });
        }
        _ => match (number(left, op.symbol())?, number(right, op.symbol())?) {
            (Number::Int(a), Number::Int(b)) => compare(op, a, b),
            (a, b) => compare(op, a.to_f64(), b.to_f64()),
        },
    };
    Ok(Value::Bool(result))
}

fn compare<T: PartialOrd>(op: ComparisonOp, a: T, b: T) -> bool {
    match op {
        ComparisonOp::Ge => a >= b,
        ComparisonOp::Gt => a > b,
        ComparisonOp::Le => a <= b,
        ComparisonOp::Lt => a < b,
        ComparisonOp::Eq => a == b,
        ComparisonOp::Ne => a != b,
    }
}

/// Apply a prefix sign. `span` covers the operator and its operand.
pub(super) fn eval_unary(op: UnaryOp, operand: &Operand, span: &Span) -> Result<Value, EvalError> {
    let value = number(operand, op.symbol())?;
    match (op, value) {
        (UnaryOp::Pos, _) => Ok(operand.value),
        (UnaryOp::Neg, Number::Int(v)) => {
            v.checked_neg()
                .map(Value::Int)
                .ok_or_else(|| EvalError::Overflow {
                    operator: op.symbol(),
                    span: span.clone(),
                })
        }
        (UnaryOp::Neg, Number::Float(v)) => Ok(Value::Float(-v)),
    }
}
