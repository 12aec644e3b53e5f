//! Math helpers for the built-in functions.
//!
//! `ln` is computed with the series
//!
//! ```text
//! ln(x) = 2 * (t + t^3/3 + t^5/5 + ...),   t = (x - 1) / (x + 1)
//! ```
//!
//! truncated to [`LN_SERIES_TERMS`] terms. The series converges quickly only
//! for `x` near 1, so the argument is first split into `m * 2^e` with
//! `m` in `[1/sqrt(2), sqrt(2)]` and `ln(x) = e * ln(2) + ln(m)`.

use core::f64::consts::SQRT_2;

/// Number of terms of the `ln` series.
pub const LN_SERIES_TERMS: usize = 20;

const EXPONENT_MASK: u64 = 0x7ff << 52;
const EXPONENT_BIAS: i32 = 1023;

// ============================================================================
// Roots
// ============================================================================

/// Principal square root. `None` for negative input.
pub fn sqrt(x: f64) -> Option<f64> {
    if x < 0.0 { None } else { Some(x.sqrt()) }
}

// ============================================================================
// Logarithms
// ============================================================================

/// Natural logarithm. `None` unless `x > 0`.
pub fn ln(x: f64) -> Option<f64> {
    if !(x > 0.0) {
        return None;
    }
    if x.is_infinite() {
        return Some(f64::INFINITY);
    }

    let (mantissa, exponent) = split_exponent(x);
    Some(f64::from(exponent) * ln_series(2.0) + ln_series(mantissa))
}

/// Logarithm of `x` in `base`. `None` unless `x > 0`.
pub fn log(x: f64, base: f64) -> Option<f64> {
    Some(ln(x)? / ln(base)?)
}

/// The truncated series itself, accurate for arguments close to 1.
pub(crate) fn ln_series(x: f64) -> f64 {
    let t = (x - 1.0) / (x + 1.0);
    let t_squared = t * t;

    let mut power = t;
    let mut sum = 0.0;
    for k in 0..LN_SERIES_TERMS {
        sum += power / (2 * k + 1) as f64;
        power *= t_squared;
    }
    2.0 * sum
}

/// Split a positive finite `x` into `(m, e)` with `x = m * 2^e` and
/// `1/sqrt(2) <= m <= sqrt(2)`.
fn split_exponent(x: f64) -> (f64, i32) {
    // Subnormals have no implicit leading bit; scale them into the normal range.
    let (x, shift) = if x < f64::MIN_POSITIVE {
        (x * 2f64.powi(54), -54)
    } else {
        (x, 0)
    };

    let bits = x.to_bits();
    let exponent = ((bits & EXPONENT_MASK) >> 52) as i32 - EXPONENT_BIAS + shift;
    let mantissa = f64::from_bits((bits & !EXPONENT_MASK) | ((EXPONENT_BIAS as u64) << 52));

    if mantissa > SQRT_2 {
        (mantissa / 2.0, exponent + 1)
    } else {
        (mantissa, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(16.0), Some(4.0));
        assert_eq!(sqrt(0.0), Some(0.0));
        assert_eq!(sqrt(-1.0), None);
    }

    #[test]
    fn test_ln_domain() {
        assert_eq!(ln(0.0), None);
        assert_eq!(ln(-3.0), None);
        assert_eq!(ln(f64::NAN), None);
        assert_eq!(ln(f64::INFINITY), Some(f64::INFINITY));
    }

    #[test]
    fn test_ln_of_one_is_zero() {
        assert_eq!(ln(1.0), Some(0.0));
    }

    #[test]
    fn test_ln_matches_std() {
        for x in [0.001, 0.5, 2.0, core::f64::consts::E, 10.0, 123.456, 1e10, 1e300] {
            assert_close(ln(x).unwrap(), x.ln());
        }
    }

    #[test]
    fn test_ln_subnormal() {
        let x = f64::MIN_POSITIVE / 1024.0;
        assert_close(ln(x).unwrap(), x.ln());
    }

    #[test]
    fn test_log_exact_powers() {
        assert_close(log(8.0, 2.0).unwrap(), 3.0);
        assert_close(log(1024.0, 2.0).unwrap(), 10.0);
        assert_close(log(1000.0, 10.0).unwrap(), 3.0);
        assert_close(log(0.01, 10.0).unwrap(), -2.0);
    }

    #[test]
    fn test_log_domain() {
        assert_eq!(log(0.0, 10.0), None);
        assert_eq!(log(-8.0, 2.0), None);
    }

    #[test]
    fn test_series_near_one() {
        assert_close(ln_series(1.25), 1.25f64.ln());
        assert_close(ln_series(0.75), 0.75f64.ln());
    }

    #[test]
    fn test_split_exponent() {
        assert_eq!(split_exponent(8.0), (1.0, 3));
        assert_eq!(split_exponent(1.0), (1.0, 0));
        assert_eq!(split_exponent(1.5), (0.75, 1));
        assert_eq!(split_exponent(0.5), (1.0, -1));
    }
}
