//! Polynomials with arbitrary-precision non-negative integer coefficients.
//!
//! # Components
//! - `polynomial`: Horner evaluation over `BigUint`.
//!
//! A `Polynomial` is stored dense: index `i` holds the coefficient of `x^i`.
//! Sparse input (powers with gaps) is densified with zero coefficients.

pub mod polynomial;

pub use polynomial::evaluate_polynomial;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

/// A polynomial in one indeterminate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<BigUint>,
}

impl Polynomial {
    /// Builds a polynomial from dense coefficients `[c0, c1, ..., cn]`.
    pub fn new(coeffs: Vec<BigUint>) -> Self {
        Self { coeffs }
    }

    /// Builds a polynomial from a power → coefficient map.
    ///
    /// Every power from 0 up to the largest key is present in the result;
    /// powers missing from `terms` become zero. An empty map yields the empty
    /// polynomial.
    pub fn from_terms(terms: BTreeMap<usize, BigUint>) -> Self {
        let len = match terms.keys().next_back() {
            Some(&max) => max + 1,
            None => return Self::default(),
        };
        let mut coeffs = Vec::with_capacity(len);
        coeffs.resize(len, BigUint::zero());
        for (power, c) in terms {
            coeffs[power] = c;
        }
        Self { coeffs }
    }

    /// Coefficients, constant term first.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coeffs
    }

    /// Highest power with a slot in the coefficient vector, or `None` when
    /// there are no coefficients at all.
    ///
    /// Trailing zero coefficients are not trimmed: `{0: 2, 5: 0}` has degree 5.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates the polynomial at `x`.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        evaluate_polynomial(&self.coeffs, x)
    }
}

impl From<Vec<BigUint>> for Polynomial {
    fn from(coeffs: Vec<BigUint>) -> Self {
        Self::new(coeffs)
    }
}
