//! Reduced-precision base-10 logarithm of big integers.
//!
//! This is the only place amounts pass through floating point. The result is
//! accurate to roughly 15 significant digits of the input, which is far below
//! what survives score rounding.

use num_bigint::BigInt;
use num_traits::Signed;

/// Maximum number of leading digits used as the mantissa
pub const MANTISSA_DIGITS: usize = 15;

/// Approximate `log10(value)`.
///
/// The first (up to) 15 decimal digits form the mantissa and every remaining
/// digit adds one to the exponent. Zero and negative values yield `0.0`.
pub fn approx_log10(value: &BigInt) -> f64 {
    if !value.is_positive() {
        return 0.0;
    }

    let digits = value.to_str_radix(10);
    let mantissa_len = digits.len().min(MANTISSA_DIGITS);
    let exponent = digits.len() - mantissa_len;

    // Up to 15 ASCII digits always parse
    let mantissa: f64 = digits[..mantissa_len].parse().unwrap_or(0.0);

    mantissa.log10() + exponent as f64
}
