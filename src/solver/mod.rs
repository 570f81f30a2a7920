//! Iterative solution methods
//!
//! # Available methods
//!
//! - **Jacobi** — two-phase simultaneous relaxation; every row update reads
//!   only the previous sweep. Best for strictly diagonally dominant
//!   systems.
//! - **Gauss-Seidel** — in-place relaxation parallelized over graph-colored
//!   row classes; reads the freshest solution available.
//! - **Conjugate Gradient** — Krylov method for symmetric positive definite
//!   systems.
//!
//! All three run under one convergence driver: apply a step, refresh the
//! residual, test its infinity norm against the tolerance, repeat until
//! convergence or the iteration budget is exhausted. Configuration lives in
//! [`SolveOptions`]; every solve returns a [`SolveReport`].
//!
//! The usual entry points are the methods on
//! [`DenseLinearSystem`](crate::system::DenseLinearSystem); the per-method
//! modules additionally expose their raw step kernels for callers composing
//! their own outer loops (e.g. smoothing inside a multigrid cycle).

mod driver;
mod types;

pub mod cg;
pub mod gauss_seidel;
pub mod jacobi;

pub use types::{SolveOptions, SolveReport};
