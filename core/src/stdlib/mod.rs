//! SimpleInt Standard Library
//!
//! Numeric helpers behind the built-in functions:
//! - `sqrt`: principal square root
//! - `log2` / `log10`: logarithms built on a fixed-length series for `ln`

pub mod math;

pub use math::{LN_SERIES_TERMS, ln, log, sqrt};
