//! Dense linear system state
//!
//! [`DenseLinearSystem`] owns everything a solve touches: the matrix, the
//! right-hand side, the solution estimate, the residual, and the scratch
//! vectors the kernels relax through. All solver operations take `&mut
//! self`, so a system can never be shared between concurrent solves.

use crate::backend::{Backend, CpuBackend};
use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;
use crate::solver::{self, SolveOptions, SolveReport};

/// A dense n×n linear system Ax = b with in-place solver state
///
/// Dimensions are fixed at construction; [`set_system`](Self::set_system)
/// replaces A and b but only with matching shapes. The solution estimate
/// starts at zero and carries over between solves — call
/// [`reset_guess`](Self::reset_guess) to start a method from scratch.
///
/// Diagonal entries of A must be nonzero for the relaxation methods; the
/// kernels do not check this, and a zero pivot propagates as an ordinary
/// floating-point special value through the residual (see
/// [`validate_diagonal`](Self::validate_diagonal) for the explicit check).
#[derive(Debug, Clone)]
pub struct DenseLinearSystem<B: Backend = CpuBackend> {
    pub(crate) backend: B,
    pub(crate) a: DenseMatrix,
    pub(crate) b: Vec<f64>,
    /// Solution estimate
    pub(crate) x: Vec<f64>,
    /// Residual b − Ax, as of the last residual computation
    pub(crate) r: Vec<f64>,
    /// Conjugate Gradient search direction
    pub(crate) p: Vec<f64>,
    /// Scratch: Jacobi staging, Gauss-Seidel class staging, CG's A·p
    pub(crate) t: Vec<f64>,
    pub(crate) options: SolveOptions,
}

impl DenseLinearSystem<CpuBackend> {
    /// System of dimension n on the CPU backend with default options.
    ///
    /// A and b start zeroed; supply them with [`set_system`](Self::set_system).
    pub fn new(n: usize) -> Self {
        Self::new_with(n, CpuBackend, SolveOptions::default())
    }

    /// System of dimension n on the CPU backend with the given options.
    pub fn with_options(n: usize, options: SolveOptions) -> Self {
        Self::new_with(n, CpuBackend, options)
    }

    /// System built directly from A and b with default options.
    ///
    /// The dimension is taken from `b`; fails with
    /// [`Error::ShapeMismatch`] when `a` does not match it.
    pub fn from_system(a: DenseMatrix, b: Vec<f64>) -> Result<Self> {
        let mut system = Self::new(b.len());
        system.set_system(a, b)?;
        Ok(system)
    }
}

impl<B: Backend> DenseLinearSystem<B> {
    /// System of dimension n on an explicit backend.
    pub fn new_with(n: usize, backend: B, options: SolveOptions) -> Self {
        Self {
            backend,
            a: DenseMatrix::zeros(n),
            b: vec![0.0; n],
            x: vec![0.0; n],
            r: vec![0.0; n],
            p: vec![0.0; n],
            t: vec![0.0; n],
            options,
        }
    }

    /// System dimension
    #[inline]
    pub fn n(&self) -> usize {
        self.b.len()
    }

    /// Replace A and b.
    ///
    /// Fails with [`Error::ShapeMismatch`] when `a` is not n×n or `b` is
    /// not length n; the existing A and b are untouched on error.
    pub fn set_system(&mut self, a: DenseMatrix, b: Vec<f64>) -> Result<()> {
        let n = self.n();
        if a.n() != n {
            return Err(Error::ShapeMismatch {
                expected: vec![n, n],
                got: vec![a.n(), a.n()],
            });
        }
        if b.len() != n {
            return Err(Error::ShapeMismatch {
                expected: vec![n],
                got: vec![b.len()],
            });
        }
        self.a = a;
        self.b = b;
        Ok(())
    }

    /// Replace the solution estimate solvers start from.
    ///
    /// Fails with [`Error::ShapeMismatch`] when `guess` is not length n.
    pub fn set_guess(&mut self, guess: &[f64]) -> Result<()> {
        if guess.len() != self.n() {
            return Err(Error::ShapeMismatch {
                expected: vec![self.n()],
                got: vec![guess.len()],
            });
        }
        self.x.copy_from_slice(guess);
        Ok(())
    }

    /// Zero the solution estimate.
    pub fn reset_guess(&mut self) {
        self.x.fill(0.0);
    }

    /// Current solution estimate
    #[inline]
    pub fn solution(&self) -> &[f64] {
        &self.x
    }

    /// Residual b − Ax, as of the last residual computation
    #[inline]
    pub fn residual(&self) -> &[f64] {
        &self.r
    }

    /// The matrix A
    #[inline]
    pub fn matrix(&self) -> &DenseMatrix {
        &self.a
    }

    /// The right-hand side b
    #[inline]
    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    /// The options every solve runs under
    #[inline]
    pub fn options(&self) -> SolveOptions {
        self.options
    }

    /// Check every diagonal entry of A is a usable divisor.
    ///
    /// The solve methods skip this check and let special values propagate;
    /// callers wanting the precondition verified invoke it explicitly.
    pub fn validate_diagonal(&self) -> Result<()> {
        for i in 0..self.n() {
            let value = self.a[(i, i)];
            if value.abs() < f64::MIN_POSITIVE {
                return Err(Error::SingularPivot { row: i, value });
            }
        }
        Ok(())
    }

    /// Recompute the residual r = b − Ax (row-parallel).
    pub fn compute_residual(&mut self) {
        let Self {
            backend, a, b, x, r, ..
        } = self;
        backend.par_for(r, |i, ri| {
            let mut acc = b[i];
            for (&aij, &xj) in a.row(i).iter().zip(x.iter()) {
                acc -= aij * xj;
            }
            *ri = acc;
        });
    }

    /// Infinity norm of the residual, folded on the calling thread.
    ///
    /// NaN components propagate into the result rather than vanishing under
    /// `max`, so a poisoned residual never reads as converged.
    pub fn residual_norm_inf(&self) -> f64 {
        self.r
            .iter()
            .map(|v| v.abs())
            .fold(0.0, |m, v| if v > m || v.is_nan() { v } else { m })
    }

    /// Solve with Jacobi iteration. Returns the outcome; the estimate and
    /// residual stay readable via [`solution`](Self::solution) and
    /// [`residual`](Self::residual).
    pub fn solve_jacobi(&mut self) -> SolveReport {
        solver::jacobi::solve(self)
    }

    /// Solve with graph-colored parallel Gauss-Seidel.
    pub fn solve_gauss_seidel(&mut self) -> SolveReport {
        solver::gauss_seidel::solve(self)
    }

    /// Solve with Conjugate Gradient. A should be symmetric positive
    /// definite.
    pub fn solve_conjugate_gradient(&mut self) -> SolveReport {
        solver::cg::solve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_guess_rejects_wrong_length() {
        let mut system = DenseLinearSystem::new(3);
        let err = system.set_guess(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: vec![3],
                got: vec![2],
            }
        );
    }

    #[test]
    fn validate_diagonal_reports_zero_pivot() {
        let mut system = DenseLinearSystem::new(2);
        let mut a = DenseMatrix::zeros(2);
        a[(0, 0)] = 1.0; // A[1,1] left at zero
        system.set_system(a, vec![1.0, 1.0]).unwrap();
        match system.validate_diagonal() {
            Err(Error::SingularPivot { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, 0.0);
            }
            other => panic!("expected SingularPivot, got {:?}", other),
        }
    }

    #[test]
    fn residual_norm_propagates_nan() {
        let mut system = DenseLinearSystem::new(2);
        system.r[0] = f64::NAN;
        system.r[1] = 0.5;
        assert!(system.residual_norm_inf().is_nan());
        system.r[0] = -2.0;
        assert_eq!(system.residual_norm_inf(), 2.0);
    }
}
