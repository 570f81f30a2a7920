//! # densr
//!
//! **Parallel iterative solvers for dense linear systems.**
//!
//! densr solves Ax = b with three interchangeable methods — Jacobi,
//! graph-colored Gauss-Seidel, and Conjugate Gradient — over dense
//! row-major storage. Row-parallel inner loops run against a pluggable
//! execution backend, and a randomized graph-coloring scheduler partitions
//! rows into independent sets so Gauss-Seidel can update whole groups of
//! rows concurrently without races.
//!
//! ## Why densr?
//!
//! - **Three methods, one state object**: swap relaxation for Krylov
//!   without rebuilding the system
//! - **Race-free parallel Gauss-Seidel**: independent-set scheduling from
//!   the matrix sparsity pattern, reusable for other row-parallel
//!   algorithms
//! - **Backend-agnostic kernels**: solvers only need a parallel-for and a
//!   parallel sum reduction
//!
//! ## Quick start
//!
//! ```
//! use densr::prelude::*;
//!
//! let a = DenseMatrix::from_row_major(2, vec![4.0, 1.0, 1.0, 3.0])?;
//! let mut system = DenseLinearSystem::new(2);
//! system.set_system(a, vec![1.0, 2.0])?;
//!
//! let report = system.solve_conjugate_gradient();
//! assert!(report.converged);
//! assert!(system.residual().iter().all(|v| v.abs() <= 1e-6));
//! # Ok::<(), densr::Error>(())
//! ```
//!
//! ## Feature flags
//!
//! - `rayon` (default): multi-threaded CPU backend; without it the CPU
//!   backend runs the same kernels serially

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod coloring;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod system;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::{Backend, CpuBackend};
    pub use crate::coloring::{color_rows, color_rows_with, Coloring};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::DenseMatrix;
    pub use crate::solver::{SolveOptions, SolveReport};
    pub use crate::system::DenseLinearSystem;
}
