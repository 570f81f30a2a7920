//! Shared convergence loop
//!
//! One driver serves all three methods: compute the residual, then
//! alternate a single method step with a residual refresh until the
//! infinity norm drops below the tolerance or the iteration budget runs
//! out. Conjugate Gradient maintains the residual inside its own step, so
//! it opts out of the refresh and the convergence test reads the
//! step-updated vector directly.

use crate::backend::Backend;
use crate::system::DenseLinearSystem;

use super::types::SolveReport;

/// How a method keeps the residual current between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResidualUpdate {
    /// Recompute r = b − Ax after every step
    Recompute,
    /// The step updates r itself; skip the recomputation
    MaintainedByStep,
}

pub(crate) fn run<B, F>(
    system: &mut DenseLinearSystem<B>,
    residual: ResidualUpdate,
    mut step: F,
) -> SolveReport
where
    B: Backend,
    F: FnMut(&mut DenseLinearSystem<B>),
{
    let options = system.options;

    system.compute_residual();

    let mut iterations = 0;
    while iterations < options.max_iter && system.residual_norm_inf() > options.epsilon {
        step(system);
        if residual == ResidualUpdate::Recompute {
            system.compute_residual();
        }
        iterations += 1;
    }

    let residual_norm = system.residual_norm_inf();
    SolveReport {
        iterations,
        residual_norm,
        converged: residual_norm <= options.epsilon,
    }
}
