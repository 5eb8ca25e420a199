//! Base decoder: digit string → `BigUint`.

use num_bigint::BigUint;
use num_traits::Zero;

use super::alphabet::digit_value;
use super::{Radix, RadixError};

/// Decodes `digits` written in `base` (2..=36).
///
/// Symbols are read most-significant first and are case-insensitive. The
/// empty string decodes to zero.
///
/// # Errors
/// * `MalformedBase` if `base` is outside `2..=36`.
/// * `InvalidDigit` for the first symbol that is not in the alphabet or whose
///   value is not below `base`.
pub fn decode(digits: &str, base: u32) -> Result<BigUint, RadixError> {
    decode_radix(digits, Radix::input(base)?)
}

/// Decodes `digits` with an already validated radix.
pub fn decode_radix(digits: &str, radix: Radix) -> Result<BigUint, RadixError> {
    let base = radix.get();
    let mut acc = BigUint::zero();

    // acc = acc * base + d, left to right
    for (position, c) in digits.chars().enumerate() {
        let d = match digit_value(c) {
            Some(d) if d < base => d,
            _ => return Err(RadixError::InvalidDigit { digit: c, position, base }),
        };
        acc *= base;
        acc += d;
    }
    Ok(acc)
}
