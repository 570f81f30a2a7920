//! Graph-coloring scheduler for row-parallel updates
//!
//! Partitions the rows of a dense matrix into independent sets ("color
//! classes") based on its sparsity pattern: rows i and j are adjacent when
//! `A[i,j]` or `A[j,i]` is nonzero. No two rows in one class share an
//! off-diagonal coefficient, so an in-place relaxation such as Gauss-Seidel
//! can update a whole class concurrently without races. The partition is
//! not tied to any particular solver; any row-parallel algorithm with the
//! same dependency structure can reuse it.
//!
//! # Algorithm
//!
//! Randomized greedy coloring with per-vertex palettes that shrink as
//! neighbors finalize and grow when they run dry (Luby-style):
//!
//! 1. Every vertex starts uncolored with the identical palette
//!    `{0..palette_size}`, where `palette_size = max(2, max_degree / 7.5)`.
//! 2. Each round, every uncolored vertex tentatively picks a color uniformly
//!    at random from its palette. A vertex is finalized when no neighbor
//!    holds the same color (neither a tentative pick this round nor an
//!    earlier finalized color). Finalized colors are pruned from every
//!    neighbor's palette.
//! 3. A vertex whose palette runs empty gets a fresh color appended so it
//!    always has at least one option. If a round finalizes nothing, a stall
//!    counter ticks; at [`MAX_STALL_ROUNDS`] it resets and one randomly
//!    chosen uncolored vertex gets a fresh color to break the symmetry.
//!
//! The heuristic palette sizing keeps class counts small for typical
//! patterns but guarantees neither an optimal coloring nor an upper bound
//! on the number of rounds: adversarial patterns can take a long time to
//! finish, though each stall episode is bounded.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::matrix::DenseMatrix;

/// Stall rounds tolerated before force-growing one random palette
pub const MAX_STALL_ROUNDS: usize = 20;

/// Degree divisor in the initial palette size heuristic
const PALETTE_DEGREE_DIVISOR: f64 = 7.5;

/// An ordered partition of row indices into independent sets
///
/// Every row index appears in exactly one class, and no class contains two
/// rows connected by an off-diagonal nonzero of the matrix it was computed
/// for. A coloring reflects the sparsity pattern at the time it was
/// produced; recompute it after replacing the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    classes: Vec<Vec<usize>>,
}

impl Coloring {
    /// The color classes, in ascending color order
    #[inline]
    pub fn classes(&self) -> &[Vec<usize>] {
        &self.classes
    }

    /// Number of color classes
    #[inline]
    pub fn num_colors(&self) -> usize {
        self.classes.len()
    }

    /// Total number of rows covered by the partition
    pub fn num_rows(&self) -> usize {
        self.classes.iter().map(Vec::len).sum()
    }
}

/// Color the rows of `a` using the thread-local random generator.
///
/// See [`color_rows_with`] for the deterministic variant and the liveness
/// caveat.
pub fn color_rows(a: &DenseMatrix) -> Coloring {
    color_rows_with(a, &mut rand::rng())
}

/// Color the rows of `a`, drawing all random picks from `rng`.
///
/// The result is deterministic for a given generator state: identical seeds
/// produce identical colorings, and classes are always emitted in ascending
/// color order with sorted members.
///
/// Termination is probabilistic. The anti-stall mechanism keeps every stall
/// episode bounded, but there is no hard upper bound on the total number of
/// rounds for adversarial sparsity patterns.
pub fn color_rows_with<R: Rng + ?Sized>(a: &DenseMatrix, rng: &mut R) -> Coloring {
    let n = a.n();
    if n == 0 {
        return Coloring {
            classes: Vec::new(),
        };
    }

    let g = adjacency(a);
    let max_degree = g.iter().map(Vec::len).max().unwrap_or(0);
    let palette_size = initial_palette_size(max_degree);

    let base: BTreeSet<usize> = (0..palette_size).collect();
    let mut palette: Vec<BTreeSet<usize>> = vec![base; n];
    // Next fresh color per vertex, for palette growth
    let mut next_color: Vec<usize> = vec![palette_size; n];
    let mut color = vec![0usize; n];
    let mut uncolored: Vec<usize> = (0..n).collect();
    let mut stall_rounds = 0;

    while !uncolored.is_empty() {
        for &i in &uncolored {
            color[i] = pick(&palette[i], rng);
        }

        // A vertex survives (stays uncolored) when some neighbor holds its
        // color: a tentative pick from this round, or a final color that a
        // grown palette re-offered.
        let (finalized, survivors): (Vec<usize>, Vec<usize>) = uncolored
            .iter()
            .copied()
            .partition(|&i| g[i].iter().all(|&j| color[j] != color[i]));

        for &i in &finalized {
            for &j in &g[i] {
                palette[j].remove(&color[i]);
            }
        }

        // Pruning may have emptied a palette; restore at least one option.
        for &i in &survivors {
            if palette[i].is_empty() {
                palette[i].insert(next_color[i]);
                next_color[i] += 1;
            }
        }

        let stalled = finalized.is_empty();
        uncolored = survivors;

        if stalled {
            stall_rounds += 1;
            if stall_rounds >= MAX_STALL_ROUNDS {
                stall_rounds = 0;
                let v = uncolored[rng.random_range(0..uncolored.len())];
                palette[v].insert(next_color[v]);
                next_color[v] += 1;
            }
        }
    }

    let mut by_color: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, &c) in color.iter().enumerate() {
        by_color.entry(c).or_default().push(i);
    }

    Coloring {
        classes: by_color.into_values().collect(),
    }
}

/// Adjacency lists from off-diagonal nonzeros, in either direction
fn adjacency(a: &DenseMatrix) -> Vec<Vec<usize>> {
    let n = a.n();
    let mut g = vec![Vec::new(); n];
    for i in 0..n {
        for j in 0..n {
            if i != j && (a[(i, j)] != 0.0 || a[(j, i)] != 0.0) {
                g[i].push(j);
            }
        }
    }
    g
}

/// Initial palette size: small relative to typical degree, never below 2
fn initial_palette_size(max_degree: usize) -> usize {
    let scaled = (max_degree as f64 / PALETTE_DEGREE_DIVISOR).floor() as usize;
    scaled.max(2)
}

/// Uniform pick from a non-empty palette
fn pick<R: Rng + ?Sized>(palette: &BTreeSet<usize>, rng: &mut R) -> usize {
    let k = rng.random_range(0..palette.len());
    *palette
        .iter()
        .nth(k)
        .expect("palette is kept non-empty between rounds")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_floors_at_two() {
        assert_eq!(initial_palette_size(0), 2);
        assert_eq!(initial_palette_size(7), 2);
        assert_eq!(initial_palette_size(15), 2);
        assert_eq!(initial_palette_size(30), 4);
        assert_eq!(initial_palette_size(75), 10);
    }

    #[test]
    fn adjacency_is_symmetric_for_one_sided_nonzeros() {
        let mut a = DenseMatrix::zeros(3);
        a[(0, 0)] = 1.0;
        a[(1, 1)] = 1.0;
        a[(2, 2)] = 1.0;
        a[(0, 1)] = 5.0; // A[1,0] stays zero
        let g = adjacency(&a);
        assert_eq!(g[0], vec![1]);
        assert_eq!(g[1], vec![0]);
        assert!(g[2].is_empty());
    }

    #[test]
    fn empty_matrix_yields_empty_coloring() {
        let a = DenseMatrix::zeros(0);
        let coloring = color_rows(&a);
        assert_eq!(coloring.num_colors(), 0);
        assert_eq!(coloring.num_rows(), 0);
    }

    #[test]
    fn single_row_gets_one_class() {
        let mut a = DenseMatrix::zeros(1);
        a[(0, 0)] = 3.0;
        let coloring = color_rows(&a);
        assert_eq!(coloring.num_colors(), 1);
        assert_eq!(coloring.classes()[0], vec![0]);
    }
}
