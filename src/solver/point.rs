//! Evaluation points.
//!
//! A point is a single numeric string read two ways: as the base-10 value
//! substituted for the indeterminate, and as the base its result is written
//! in. `"5"` evaluates at x = 5 and prints the result in base 5. There is no
//! separate base field; this mirrors the input format exactly.

use alloc::string::String;
use core::fmt;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::radix::{decode, Radix, RadixError};

/// A parsed evaluation point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationPoint {
    literal: String,
    value: BigUint,
    radix: Radix,
}

impl EvaluationPoint {
    /// Parses a point literal.
    ///
    /// Surrounding whitespace and a single leading `+` are ignored for both
    /// interpretations but kept in `literal()`, which is what results are
    /// keyed by.
    ///
    /// # Errors
    /// * `InvalidDigit` if the rest is not a decimal numeral. A leading `-`
    ///   is reported here, since points are non-negative.
    /// * `MalformedBase` if its value is not a usable output base (1..=36).
    ///   Values beyond `u32` are reported as `MalformedBase(u32::MAX)`.
    pub fn parse(literal: &str) -> Result<Self, RadixError> {
        let trimmed = literal.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let value = decode(digits, Radix::DECIMAL.get())?;
        let base = value.to_u32().unwrap_or(u32::MAX);
        let radix = Radix::output(base)?;
        Ok(Self {
            literal: String::from(literal),
            value,
            radix,
        })
    }

    /// The original string, untouched.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The value substituted for x.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The base the result is encoded in.
    pub fn radix(&self) -> Radix {
        self.radix
    }
}

impl fmt::Display for EvaluationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_base_share_literal() {
        let p = EvaluationPoint::parse("16").unwrap();
        assert_eq!(p.value(), &BigUint::from(16u32));
        assert_eq!(p.radix().get(), 16);
        assert_eq!(p.literal(), "16");
    }

    #[test]
    fn test_unary_point() {
        let p = EvaluationPoint::parse("1").unwrap();
        assert!(p.radix().is_unary());
    }

    #[test]
    fn test_whitespace_kept_in_literal() {
        let p = EvaluationPoint::parse(" 7 ").unwrap();
        assert_eq!(p.radix().get(), 7);
        assert_eq!(p.literal(), " 7 ");
    }

    #[test]
    fn test_leading_plus_sign() {
        let p = EvaluationPoint::parse("+5").unwrap();
        assert_eq!(p.value(), &BigUint::from(5u32));
        assert_eq!(p.radix().get(), 5);
        assert_eq!(p.literal(), "+5");

        let p = EvaluationPoint::parse(" +12").unwrap();
        assert_eq!(p.radix().get(), 12);
        assert_eq!(p.literal(), " +12");
    }

    #[test]
    fn test_rejects_doubled_sign() {
        assert_eq!(
            EvaluationPoint::parse("++5"),
            Err(RadixError::InvalidDigit { digit: '+', position: 0, base: 10 })
        );
        assert_eq!(
            EvaluationPoint::parse("-3"),
            Err(RadixError::InvalidDigit { digit: '-', position: 0, base: 10 })
        );
    }

    #[test]
    fn test_rejects_out_of_range_base() {
        assert_eq!(EvaluationPoint::parse("0"), Err(RadixError::MalformedBase(0)));
        assert_eq!(EvaluationPoint::parse(""), Err(RadixError::MalformedBase(0)));
        assert_eq!(EvaluationPoint::parse("37"), Err(RadixError::MalformedBase(37)));
        assert_eq!(
            EvaluationPoint::parse("99999999999999999999"),
            Err(RadixError::MalformedBase(u32::MAX))
        );
    }

    #[test]
    fn test_rejects_non_decimal() {
        assert_eq!(
            EvaluationPoint::parse("1a"),
            Err(RadixError::InvalidDigit { digit: 'a', position: 1, base: 10 })
        );
    }
}
