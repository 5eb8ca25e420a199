//! Positional numeral conversion over arbitrary-precision integers.
//!
//! # Components
//! - `alphabet`: the shared 36-symbol digit table.
//! - `decode`: digit string + base → `BigUint`.
//! - `encode`: `BigUint` + base → digit string (including unary base 1).
//!
//! All functions here are pure. Invalid input fails closed with a
//! `RadixError`; nothing is skipped or coerced.

pub mod alphabet;
pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::encode;

use core::fmt;
use alphabet::ALPHABET_LEN;

/// Errors for base conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixError {
    /// A symbol outside the alphabet, or not below the base.
    InvalidDigit {
        digit: char,
        /// Zero-based character index within the input string.
        position: usize,
        base: u32,
    },
    /// Base outside the range accepted by the operation.
    MalformedBase(u32),
    /// Unary (base 1) output would not fit in memory.
    UnaryOverflow,
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::InvalidDigit { digit, position, base } => {
                write!(f, "Invalid digit '{}' at position {} for base {}", digit, position, base)
            }
            RadixError::MalformedBase(base) => {
                write!(f, "Malformed base {} (supported: 1..={})", base, ALPHABET_LEN)
            }
            RadixError::UnaryOverflow => write!(f, "Value too large for unary encoding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RadixError {}

/// A validated base.
///
/// `Radix::output` accepts `1..=36` (base 1 is unary). `Radix::input`
/// accepts `2..=36`, since unary has no zero digit to decode against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Unary.
    pub const UNARY: Radix = Radix(1);
    pub const DECIMAL: Radix = Radix(10);

    /// Validates a base usable for encoding.
    pub fn output(base: u32) -> Result<Self, RadixError> {
        if (1..=ALPHABET_LEN).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(RadixError::MalformedBase(base))
        }
    }

    /// Validates a base usable for decoding.
    pub fn input(base: u32) -> Result<Self, RadixError> {
        if (2..=ALPHABET_LEN).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(RadixError::MalformedBase(base))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_unary(self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
