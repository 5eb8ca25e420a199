//! Base encoder: `BigUint` → digit string.

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::alphabet::symbol;
use super::{Radix, RadixError};

/// Encodes `value` in `base` (1..=36).
///
/// * Zero is always `"0"`, including in base 1.
/// * Base 1 is unary: `value` copies of `'1'`.
/// * Otherwise standard positional notation, lowercase, no leading zeros.
///
/// # Errors
/// * `MalformedBase` if `base` is outside `1..=36`.
/// * `UnaryOverflow` if a unary result could not be allocated.
pub fn encode(value: &BigUint, base: u32) -> Result<String, RadixError> {
    encode_radix(value, Radix::output(base)?)
}

/// Encodes `value` with an already validated radix.
pub fn encode_radix(value: &BigUint, radix: Radix) -> Result<String, RadixError> {
    if value.is_zero() {
        return Ok(String::from("0"));
    }
    if radix.is_unary() {
        return encode_unary(value);
    }

    let base = BigUint::from(radix.get());
    let mut num = value.clone();
    // Least significant digit first, reversed at the end.
    let mut out: Vec<char> = Vec::new();
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base);
        // remainder < base <= 36
        let d = remainder.to_u32().ok_or(RadixError::MalformedBase(radix.get()))?;
        out.push(symbol(d).ok_or(RadixError::MalformedBase(radix.get()))?);
        num = quotient;
    }
    Ok(out.into_iter().rev().collect())
}

fn encode_unary(value: &BigUint) -> Result<String, RadixError> {
    let len = value.to_usize().ok_or(RadixError::UnaryOverflow)?;
    let one = symbol(1).ok_or(RadixError::UnaryOverflow)?;
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| RadixError::UnaryOverflow)?;
    out.extend(core::iter::repeat(one).take(len));
    Ok(out)
}
