//! Conjugate Gradient (Hestenes-Stiefel)
//!
//! Krylov method for symmetric positive definite systems. Each step runs
//! five phases, every one a barrier — later phases read what earlier
//! phases wrote:
//!
//! ```text
//! t = A·p
//! alpha = <r,r> / <p,t>
//! x += alpha·p ; r -= alpha·t
//! beta = <r,r>_new / <r,r>_old
//! p = r + beta·p
//! ```
//!
//! The residual is maintained incrementally (`r -= alpha·t`), so the solve
//! skips the driver's per-iteration residual recomputation.

use crate::backend::Backend;
use crate::system::DenseLinearSystem;

use super::driver::{self, ResidualUpdate};
use super::types::SolveReport;

/// One Conjugate Gradient step.
///
/// Requires `r` to hold the current residual and `p` the current search
/// direction; [`solve`] establishes both before the first step. A zero
/// `<p, A·p>` (semi-definite or exhausted direction) divides through as an
/// ordinary floating-point special value and surfaces in the residual.
pub fn step<B: Backend>(system: &mut DenseLinearSystem<B>) {
    let n = system.n();
    let DenseLinearSystem {
        backend, a, x, r, p, t, ..
    } = system;

    // t = A·p
    backend.par_for(t, |i, ti| {
        let mut acc = 0.0;
        for (&aij, &pj) in a.row(i).iter().zip(p.iter()) {
            acc += aij * pj;
        }
        *ti = acc;
    });

    let alpha_num = backend.par_sum(n, |i| r[i] * r[i]);
    let alpha_den = backend.par_sum(n, |i| p[i] * t[i]);
    let alpha = alpha_num / alpha_den;

    backend.par_for(x, |i, xi| *xi += alpha * p[i]);
    backend.par_for(r, |i, ri| *ri -= alpha * t[i]);

    // beta reuses the pre-update <r,r> as its denominator
    let beta_num = backend.par_sum(n, |i| r[i] * r[i]);
    let beta = beta_num / alpha_num;

    backend.par_for(p, |i, pi| *pi = r[i] + beta * *pi);
}

/// Solve the system with Conjugate Gradient under the shared convergence
/// loop.
pub fn solve<B: Backend>(system: &mut DenseLinearSystem<B>) -> SolveReport {
    // The first search direction is the steepest-descent direction r = b − Ax.
    system.compute_residual();
    let DenseLinearSystem { r, p, .. } = system;
    p.copy_from_slice(r);

    driver::run(system, ResidualUpdate::MaintainedByStep, step)
}
