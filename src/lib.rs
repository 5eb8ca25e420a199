#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod radix;
pub mod poly;
pub mod solver;
pub mod config;
#[cfg(feature = "json")]
pub mod document;

pub use config::{ErrorPolicy, SolverConfig};
pub use poly::{evaluate_polynomial, Polynomial};
pub use radix::{decode, encode, Radix, RadixError};
pub use solver::{solve, Coefficient, EvaluationPoint, ResultEntry, Solution, SolveError};
