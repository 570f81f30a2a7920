//! Jacobi iteration
//!
//! Two-phase simultaneous relaxation: every row's new value is computed
//! against the pre-sweep solution into a staging buffer, then the whole
//! sweep commits at once. No update within a sweep can observe another
//! update from the same sweep — the staging commit is the distinction
//! between Jacobi and Gauss-Seidel.

use crate::backend::Backend;
use crate::system::DenseLinearSystem;

use super::driver::{self, ResidualUpdate};
use super::types::SolveReport;

/// One Jacobi sweep over all rows.
///
/// Writes relaxed values `(b[i] − Σ_{j≠i} A[i,j]·x[j]) / A[i,i]` for every
/// row into the scratch vector, then commits them to the solution.
pub fn step<B: Backend>(system: &mut DenseLinearSystem<B>) {
    let DenseLinearSystem {
        backend, a, b, x, t, ..
    } = system;

    backend.par_for(t, |i, ti| {
        let row = a.row(i);
        let mut acc = b[i];
        for (j, (&aij, &xj)) in row.iter().zip(x.iter()).enumerate() {
            if j != i {
                acc -= aij * xj;
            }
        }
        *ti = acc / row[i];
    });

    system.x.copy_from_slice(&system.t);
}

/// Solve the system with Jacobi under the shared convergence loop.
pub fn solve<B: Backend>(system: &mut DenseLinearSystem<B>) -> SolveReport {
    driver::run(system, ResidualUpdate::Recompute, step)
}
