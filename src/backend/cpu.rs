//! CPU execution backend
//!
//! Uses rayon when the `rayon` feature is enabled (default) and the index
//! range is large enough to amortize thread dispatch; falls back to plain
//! serial loops otherwise. Both paths compute identical results.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::Backend;

/// Parallelization threshold: skip rayon dispatch for small index ranges
/// (overhead > benefit)
const PARALLEL_THRESHOLD: usize = 4096;

/// CPU backend with rayon-parallel loops and a serial fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuBackend;

impl Backend for CpuBackend {
    fn name() -> &'static str {
        "cpu"
    }

    fn par_for<F>(&self, out: &mut [f64], op: F)
    where
        F: Fn(usize, &mut f64) + Sync,
    {
        #[cfg(feature = "rayon")]
        if out.len() >= PARALLEL_THRESHOLD {
            out.par_iter_mut().enumerate().for_each(|(i, v)| op(i, v));
            return;
        }

        for (i, v) in out.iter_mut().enumerate() {
            op(i, v);
        }
    }

    fn par_sum<F>(&self, len: usize, contrib: F) -> f64
    where
        F: Fn(usize) -> f64 + Sync,
    {
        #[cfg(feature = "rayon")]
        if len >= PARALLEL_THRESHOLD {
            return (0..len).into_par_iter().map(|i| contrib(i)).sum();
        }

        (0..len).map(contrib).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_for_writes_every_index() {
        let backend = CpuBackend;
        // Above the threshold so the rayon path runs when the feature is on.
        let mut out = vec![0.0; 10_000];
        backend.par_for(&mut out, |i, v| *v = i as f64 * 2.0);
        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, i as f64 * 2.0, "element {} not written", i);
        }
    }

    #[test]
    fn par_sum_matches_serial_sum() {
        let backend = CpuBackend;
        let len = 10_000;
        let parallel = backend.par_sum(len, |i| (i as f64).sqrt());
        let serial: f64 = (0..len).map(|i| (i as f64).sqrt()).sum();
        assert!(
            (parallel - serial).abs() < 1e-6,
            "parallel {} vs serial {}",
            parallel,
            serial
        );
    }

    #[test]
    fn par_sum_empty_range_is_zero() {
        let backend = CpuBackend;
        assert_eq!(backend.par_sum(0, |_| 1.0), 0.0);
    }
}
