//! Parallel Gauss-Seidel via graph coloring
//!
//! Rows are partitioned into independent sets (see [`crate::coloring`]).
//! Classes sweep in a fixed sequential order; within a class every row
//! relaxes concurrently against the current solution, and the class
//! boundary is a barrier, so updates from class k are visible to class
//! k+1. Unlike Jacobi there is no sweep-wide staging: each row reads the
//! freshest solution available when its class runs.

use crate::backend::Backend;
use crate::coloring::{self, Coloring};
use crate::system::DenseLinearSystem;

use super::driver::{self, ResidualUpdate};
use super::types::SolveReport;

/// Relax one color class against the current solution.
///
/// `class` must be an independent set for the system's matrix: no two
/// member rows may be connected by an off-diagonal nonzero. Member updates
/// are staged in the scratch vector and committed at the class boundary;
/// because members share no coefficient, this reads and writes exactly
/// what elementwise in-place updates would.
pub fn step_class<B: Backend>(system: &mut DenseLinearSystem<B>, class: &[usize]) {
    let DenseLinearSystem {
        backend, a, b, x, t, ..
    } = system;

    let staged = &mut t[..class.len()];
    backend.par_for(staged, |k, sk| {
        let i = class[k];
        let row = a.row(i);
        let mut acc = b[i];
        for (j, (&aij, &xj)) in row.iter().zip(x.iter()).enumerate() {
            if j != i {
                acc -= aij * xj;
            }
        }
        *sk = acc / row[i];
    });

    for (k, &i) in class.iter().enumerate() {
        system.x[i] = system.t[k];
    }
}

/// One full sweep: every class of the coloring, in order.
pub fn step<B: Backend>(system: &mut DenseLinearSystem<B>, coloring: &Coloring) {
    for class in coloring.classes() {
        step_class(system, class);
    }
}

/// Solve the system with colored Gauss-Seidel under the shared convergence
/// loop.
///
/// The coloring is computed fresh for each solve, so a matrix swapped in
/// via [`DenseLinearSystem::set_system`] is never swept with a stale
/// partition. The partition is reused across all sweeps of the solve.
pub fn solve<B: Backend>(system: &mut DenseLinearSystem<B>) -> SolveReport {
    let coloring = coloring::color_rows(system.matrix());
    driver::run(system, ResidualUpdate::Recompute, |sys| step(sys, &coloring))
}
