//! Options and report types for the solve entry points

/// Configuration shared by all solve methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Maximum number of outer iterations (default: 100)
    pub max_iter: usize,
    /// Convergence tolerance on the residual infinity norm (default: 1e-6)
    pub epsilon: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            epsilon: 1e-6,
        }
    }
}

/// Outcome of a solve
///
/// Exhausting the iteration budget is not an error: the report simply
/// carries `converged: false` with `iterations` equal to the budget, and
/// the caller decides from `residual_norm` whether the estimate is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveReport {
    /// Number of outer iterations executed (0 if the initial guess already
    /// met the tolerance)
    pub iterations: usize,
    /// Final residual infinity norm
    pub residual_norm: f64,
    /// Whether the tolerance was met within the iteration budget
    pub converged: bool,
}
