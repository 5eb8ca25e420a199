//! Configuration for the solver and the command-line front end.
//!
//! Defines the structure for user-configurable settings.

use alloc::string::String;

/// What the solver does when a single evaluation point is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first invalid point and return its error.
    #[default]
    Abort,
    /// Log the invalid point and leave it out of the solution.
    SkipPoint,
}

/// Main configuration structure.
///
/// This struct should be populated by the host application (CLI or library
/// caller) and passed to `solver::solve`.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Handling of invalid evaluation points. Invalid coefficients always abort.
    pub error_policy: ErrorPolicy,

    /// Upper bound on the polynomial degree accepted from input.
    /// Coefficients are stored dense, so this bounds memory use.
    pub max_degree: usize,

    /// Path of the JSON input document (CLI only).
    pub input_path: String,

    /// Pretty-print the JSON output (CLI only).
    pub pretty: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Abort,
            max_degree: 1 << 20,
            input_path: String::from("input.json"),
            pretty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.error_policy, ErrorPolicy::Abort);
        assert_eq!(cfg.input_path, "input.json");
        assert!(cfg.pretty);
        assert!(cfg.max_degree >= 20);
    }
}
