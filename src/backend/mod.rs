//! Parallel execution backends
//!
//! This module defines the [`Backend`] trait and the built-in CPU
//! implementation. A backend supplies the two data-parallel primitives the
//! solver kernels are written against:
//!
//! - a parallel-for over a fixed index range, and
//! - a parallel sum reduction over a fixed index range.
//!
//! Both calls are synchronous barriers: when a call returns, every per-index
//! operation has completed and its writes are visible to the caller. Device
//! selection, kernel compilation, and any other backend initialization are
//! outside the trait; a backend value is ready to use as constructed.

mod cpu;

pub use cpu::CpuBackend;

/// Data-parallel execution primitives for row-parallel kernels
///
/// Implementations may execute per-index operations with arbitrary
/// parallelism; the solvers only pass operations whose results are
/// independent of execution order across indices.
pub trait Backend: Clone + Send + Sync + 'static {
    /// Human-readable name of this backend
    fn name() -> &'static str;

    /// Parallel-for over the elements of `out`.
    ///
    /// Invokes `op(i, &mut out[i])` for every `i` in `0..out.len()`. The
    /// operation receives exclusive access to its own element only; any
    /// other data it reads must be captured immutably.
    fn par_for<F>(&self, out: &mut [f64], op: F)
    where
        F: Fn(usize, &mut f64) + Sync;

    /// Parallel sum reduction over `0..len`.
    ///
    /// Returns the sum of `contrib(i)` for every `i` in `0..len`. All
    /// partial contributions are combined before the call returns.
    fn par_sum<F>(&self, len: usize, contrib: F) -> f64
    where
        F: Fn(usize) -> f64 + Sync;
}
