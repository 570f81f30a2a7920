//! Shared builders for integration tests

use densr::prelude::*;

/// Circulant tridiagonal matrix: `diag` on the diagonal, −1 on both
/// off-diagonals including the wraparound corners.
pub fn circulant_tridiagonal(n: usize, diag: f64) -> DenseMatrix {
    let mut a = DenseMatrix::zeros(n);
    for i in 0..n {
        a[(i, i)] = diag;
        a[(i, (i + 1) % n)] = -1.0;
        a[(i, (i + n - 1) % n)] = -1.0;
    }
    a
}

/// The 7×7 reference system: circulant tridiagonal with diagonal 2.5,
/// b = e₀, default options (100 iterations, epsilon 1e-6).
pub fn reference_system() -> DenseLinearSystem {
    let n = 7;
    let mut system = DenseLinearSystem::new(n);
    let a = circulant_tridiagonal(n, 2.5);
    let mut b = vec![0.0; n];
    b[0] = 1.0;
    system.set_system(a, b).expect("shapes match");
    system
}
