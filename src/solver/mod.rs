//! Polynomial solving over arbitrary-base inputs.
//!
//! Ties the pure components together: coefficients are decoded with
//! `radix::decode`, assembled into a dense `Polynomial`, evaluated at every
//! point with Horner's method, and each result is re-encoded in the point's
//! own base.
//!
//! # Components
//! - `point`: evaluation point parsing (value and base from one literal).
//! - `solution`: ordered point → result map.
//!
//! # Failure Policy
//! The first invalid coefficient aborts the whole solve. Invalid points abort
//! or are skipped according to `SolverConfig::error_policy`.

pub mod point;
pub mod solution;

pub use point::EvaluationPoint;
pub use solution::{ResultEntry, Solution};

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;

use crate::config::{ErrorPolicy, SolverConfig};
use crate::poly::Polynomial;
use crate::radix::{decode, encode::encode_radix, RadixError};

/// Errors for a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The coefficient for `power` could not be decoded.
    Coefficient { power: usize, source: RadixError },
    /// The evaluation point could not be parsed or its result encoded.
    Point { point: String, source: RadixError },
    /// A coefficient power exceeds `SolverConfig::max_degree`.
    DegreeTooLarge { power: usize, max: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Coefficient { power, source } => {
                write!(f, "Coefficient for power {}: {}", power, source)
            }
            SolveError::Point { point, source } => {
                write!(f, "Evaluation point {:?}: {}", point, source)
            }
            SolveError::DegreeTooLarge { power, max } => {
                write!(f, "Coefficient power {} exceeds maximum degree {}", power, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Coefficient { source, .. } | SolveError::Point { source, .. } => Some(source),
            SolveError::DegreeTooLarge { .. } => None,
        }
    }
}

/// A raw coefficient: digits written in `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coefficient {
    pub base: u32,
    pub digits: String,
}

impl Coefficient {
    pub fn new(base: u32, digits: impl Into<String>) -> Self {
        Self { base, digits: digits.into() }
    }

    /// Decodes the digits. The base must be in `2..=36`.
    pub fn decode(&self) -> Result<BigUint, RadixError> {
        decode(&self.digits, self.base)
    }
}

/// Decodes every coefficient and densifies them into a polynomial.
///
/// Powers are validated against `max_degree` before any digit is decoded.
pub fn build_polynomial(
    coefficients: &BTreeMap<usize, Coefficient>,
    max_degree: usize,
) -> Result<Polynomial, SolveError> {
    if let Some(&power) = coefficients.keys().next_back() {
        if power > max_degree {
            return Err(SolveError::DegreeTooLarge { power, max: max_degree });
        }
    }

    let mut terms = BTreeMap::new();
    for (&power, coeff) in coefficients {
        let value = coeff
            .decode()
            .map_err(|source| SolveError::Coefficient { power, source })?;
        terms.insert(power, value);
    }
    Ok(Polynomial::from_terms(terms))
}

/// Evaluates `poly` at one point literal and encodes the result.
pub fn evaluate_point(poly: &Polynomial, literal: &str) -> Result<ResultEntry, RadixError> {
    let point = EvaluationPoint::parse(literal)?;
    let value = poly.evaluate(point.value());
    Ok(ResultEntry {
        base: String::from(point.literal()),
        value: encode_radix(&value, point.radix())?,
    })
}

/// Evaluates the polynomial given by `coefficients` at every point.
///
/// * No coefficients at all → empty solution, whatever the points.
/// * Repeated point literals produce a single entry.
/// * Entries are in first-seen order of `points`.
pub fn solve<S: AsRef<str>>(
    coefficients: &BTreeMap<usize, Coefficient>,
    points: &[S],
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    if coefficients.is_empty() {
        log::info!("No coefficients supplied; returning empty solution");
        return Ok(Solution::new());
    }

    let poly = build_polynomial(coefficients, config.max_degree)?;
    log::debug!("Polynomial degree {:?}", poly.degree());

    let mut seen = BTreeSet::new();
    let unique: Vec<&str> = points
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| seen.insert(*p))
        .collect();

    #[cfg(feature = "parallel")]
    let outcomes = {
        use rayon::prelude::*;
        unique
            .par_iter()
            .map(|&p| (p, evaluate_point(&poly, p)))
            .collect::<Vec<_>>()
            .into_iter()
    };
    #[cfg(not(feature = "parallel"))]
    let outcomes = unique.iter().map(|&p| (p, evaluate_point(&poly, p)));

    collect_solution(outcomes, config.error_policy)
}

fn collect_solution<'a, I>(outcomes: I, policy: ErrorPolicy) -> Result<Solution, SolveError>
where
    I: Iterator<Item = (&'a str, Result<ResultEntry, RadixError>)>,
{
    let mut solution = Solution::new();
    for (point, outcome) in outcomes {
        match outcome {
            Ok(entry) => {
                solution.insert(String::from(point), entry);
            }
            Err(source) => match policy {
                ErrorPolicy::Abort => {
                    return Err(SolveError::Point { point: String::from(point), source });
                }
                ErrorPolicy::SkipPoint => {
                    log::warn!("Skipping evaluation point {:?}: {}", point, source);
                }
            },
        }
    }
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix::encode;

    fn decimal_terms(terms: &[(usize, &str)]) -> BTreeMap<usize, Coefficient> {
        terms.iter().map(|&(p, d)| (p, Coefficient::new(10, d))).collect()
    }

    #[test]
    fn test_x_squared_plus_three_decimal_values() {
        let coeffs = decimal_terms(&[(0, "3"), (1, "0"), (2, "1")]);
        let poly = build_polynomial(&coeffs, 64).unwrap();
        let at5 = poly.evaluate(&BigUint::from(5u32));
        let at10 = poly.evaluate(&BigUint::from(10u32));
        assert_eq!(encode(&at5, 10).unwrap(), "28");
        assert_eq!(encode(&at10, 10).unwrap(), "103");
    }

    #[test]
    fn test_point_literal_is_output_base() {
        // P(x) = x^2 + 3: P(5) = 28 = "103" in base 5, P(10) = 103 in base 10
        let coeffs = decimal_terms(&[(0, "3"), (1, "0"), (2, "1")]);
        let sol = solve(&coeffs, &["5", "10"], &SolverConfig::default()).unwrap();
        assert_eq!(sol.get("5"), Some(&ResultEntry { base: "5".into(), value: "103".into() }));
        assert_eq!(sol.get("10"), Some(&ResultEntry { base: "10".into(), value: "103".into() }));
    }

    #[test]
    fn test_missing_power_defaults_to_zero() {
        // P(x) = x^2 + 2: P(3) = 11 = "102" in base 3
        let coeffs = decimal_terms(&[(0, "2"), (2, "1")]);
        let poly = build_polynomial(&coeffs, 64).unwrap();
        assert_eq!(poly.evaluate(&BigUint::from(3u32)), BigUint::from(11u32));

        let sol = solve(&coeffs, &["3"], &SolverConfig::default()).unwrap();
        assert_eq!(sol.get("3").unwrap().value, "102");
    }

    #[test]
    fn test_mixed_coefficient_bases() {
        // P(x) = 0xff + 0b101 * x
        let mut coeffs = BTreeMap::new();
        coeffs.insert(0, Coefficient::new(16, "FF"));
        coeffs.insert(1, Coefficient::new(2, "101"));
        let sol = solve(&coeffs, &["10", "2"], &SolverConfig::default()).unwrap();
        assert_eq!(sol.get("10").unwrap().value, "305");
        // 255 + 10 = 265 = 0b100001001
        assert_eq!(sol.get("2").unwrap().value, "100001001");
    }

    #[test]
    fn test_unary_point() {
        // P(1) = 1 + 3 = 4
        let coeffs = decimal_terms(&[(0, "3"), (2, "1")]);
        let sol = solve(&coeffs, &["1"], &SolverConfig::default()).unwrap();
        assert_eq!(sol.get("1").unwrap().value, "1111");
    }

    #[test]
    fn test_no_coefficients_empty_solution() {
        let sol = solve(&BTreeMap::new(), &["5", "10"], &SolverConfig::default()).unwrap();
        assert!(sol.is_empty());
    }

    #[test]
    fn test_no_points() {
        let coeffs = decimal_terms(&[(0, "1")]);
        let empty: [&str; 0] = [];
        assert!(solve(&coeffs, &empty, &SolverConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_points_single_entry() {
        let coeffs = decimal_terms(&[(0, "1"), (1, "1")]);
        let sol = solve(&coeffs, &["4", "4", "3"], &SolverConfig::default()).unwrap();
        assert_eq!(sol.len(), 2);
        let keys: Vec<&str> = sol.iter().map(|(p, _)| p).collect();
        assert_eq!(keys, ["4", "3"]);
    }

    #[test]
    fn test_invalid_coefficient_aborts() {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(0, Coefficient::new(10, "3"));
        coeffs.insert(1, Coefficient::new(16, "1g"));
        let config = SolverConfig { error_policy: ErrorPolicy::SkipPoint, ..Default::default() };
        let err = solve(&coeffs, &["5"], &config).unwrap_err();
        assert_eq!(
            err,
            SolveError::Coefficient {
                power: 1,
                source: RadixError::InvalidDigit { digit: 'g', position: 1, base: 16 },
            }
        );
    }

    #[test]
    fn test_malformed_coefficient_base() {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(0, Coefficient::new(40, "1"));
        let err = solve(&coeffs, &["5"], &SolverConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SolveError::Coefficient { power: 0, source: RadixError::MalformedBase(40) }
        );
    }

    #[test]
    fn test_invalid_point_aborts_by_default() {
        let coeffs = decimal_terms(&[(0, "1")]);
        let err = solve(&coeffs, &["5", "40", "6"], &SolverConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SolveError::Point { point: "40".into(), source: RadixError::MalformedBase(40) }
        );
    }

    #[test]
    fn test_invalid_point_skipped_on_request() {
        let coeffs = decimal_terms(&[(0, "1"), (1, "1")]);
        let config = SolverConfig { error_policy: ErrorPolicy::SkipPoint, ..Default::default() };
        let sol = solve(&coeffs, &["5", "0", "x", "6"], &config).unwrap();
        assert_eq!(sol.len(), 2);
        // 6 = "11" in base 5, 7 = "11" in base 6
        assert_eq!(sol.get("5").unwrap().value, "11");
        assert_eq!(sol.get("6").unwrap().value, "11");
        assert!(!sol.contains("0"));
    }

    #[test]
    fn test_degree_limit() {
        let coeffs = decimal_terms(&[(0, "1"), (100, "1")]);
        let config = SolverConfig { max_degree: 10, ..Default::default() };
        assert_eq!(
            solve(&coeffs, &["2"], &config),
            Err(SolveError::DegreeTooLarge { power: 100, max: 10 })
        );
    }

    #[test]
    fn test_large_result_base_36() {
        // P(x) = x^20 at x = 36 is "1" followed by 20 zeros in base 36
        let coeffs = decimal_terms(&[(20, "1")]);
        let sol = solve(&coeffs, &["36"], &SolverConfig::default()).unwrap();
        let expected: String = core::iter::once('1').chain(core::iter::repeat('0').take(20)).collect();
        assert_eq!(sol.get("36").unwrap().value, expected);
    }

    #[test]
    fn test_error_display_names_context() {
        let err = SolveError::Point { point: "40".into(), source: RadixError::MalformedBase(40) };
        let msg = alloc::format!("{}", err);
        assert!(msg.contains("\"40\""));
        assert!(msg.contains("Malformed base 40"));
    }
}
