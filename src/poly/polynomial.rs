//! Horner evaluation over unbounded non-negative integers.

use num_bigint::BigUint;
use num_traits::Zero;

/// Evaluates a polynomial at a given point x using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1)
///
/// # Arguments
/// * `coeffs` - Coefficients [c0, c1, ..., ck-1]
/// * `x` - The point to evaluate at
///
/// # Returns
/// * The value f(x). An empty coefficient slice evaluates to zero.
pub fn evaluate_polynomial(coeffs: &[BigUint], x: &BigUint) -> BigUint {
    // Horner's method:
    // result = 0
    // result = result * x + c[k-1]
    // ...
    // result = result * x + c[0]
    let mut result = BigUint::zero();
    for coeff in coeffs.iter().rev() {
        result *= x;
        result += coeff;
    }
    result
}
