//! Integration tests for the graph-coloring scheduler

mod common;

use common::{circulant_tridiagonal, reference_system};
use densr::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Assert the coloring is a partition of all rows and that no class holds
/// two rows connected by an off-diagonal nonzero in either direction.
fn assert_proper_partition(a: &DenseMatrix, coloring: &Coloring) {
    let n = a.n();
    let mut seen = vec![0usize; n];

    for class in coloring.classes() {
        for &i in class {
            assert!(i < n, "row index {} out of range", i);
            seen[i] += 1;
        }
        for (s, &i) in class.iter().enumerate() {
            for &j in &class[s + 1..] {
                assert!(
                    a[(i, j)] == 0.0 && a[(j, i)] == 0.0,
                    "rows {} and {} share a nonzero but got the same color",
                    i,
                    j
                );
            }
        }
    }

    for (i, &count) in seen.iter().enumerate() {
        assert_eq!(count, 1, "row {} appears {} times across classes", i, count);
    }
}

#[test]
fn circulant_coloring_is_a_proper_partition() {
    let system = reference_system();
    let coloring = color_rows(system.matrix());
    assert_proper_partition(system.matrix(), &coloring);
    assert_eq!(coloring.num_rows(), 7);
}

#[test]
fn diagonal_only_matrix_colors_in_few_classes() {
    let mut a = DenseMatrix::zeros(6);
    for i in 0..6 {
        a[(i, i)] = 1.0;
    }

    let coloring = color_rows(&a);
    assert_proper_partition(&a, &coloring);
    // No edges, so every vertex finalizes in the first round from the
    // minimum palette {0, 1}.
    assert!(
        coloring.num_colors() <= 2,
        "expected at most 2 classes, got {}",
        coloring.num_colors()
    );
}

#[test]
fn complete_graph_gets_one_row_per_class() {
    let n = 5;
    let mut a = DenseMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = if i == j { 4.0 } else { 1.0 };
        }
    }

    let coloring = color_rows(&a);
    assert_proper_partition(&a, &coloring);
    assert_eq!(coloring.num_colors(), n);
    for class in coloring.classes() {
        assert_eq!(class.len(), 1);
    }
}

#[test]
fn one_sided_nonzero_separates_rows() {
    // A[0,1] is nonzero while A[1,0] is zero; rows 0 and 1 still depend on
    // each other through that coefficient and must not share a class.
    let mut a = DenseMatrix::zeros(3);
    for i in 0..3 {
        a[(i, i)] = 2.0;
    }
    a[(0, 1)] = 5.0;

    for _ in 0..20 {
        let coloring = color_rows(&a);
        assert_proper_partition(&a, &coloring);
        for class in coloring.classes() {
            assert!(
                !(class.contains(&0) && class.contains(&1)),
                "rows 0 and 1 share a class: {:?}",
                coloring
            );
        }
    }
}

#[test]
fn seeded_coloring_is_reproducible() {
    let a = circulant_tridiagonal(9, 3.0);

    let first = color_rows_with(&a, &mut StdRng::seed_from_u64(42));
    let second = color_rows_with(&a, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
    assert_proper_partition(&a, &first);
}

#[test]
fn dense_random_pattern_colors_properly() {
    // Pseudo-random symmetric pattern, dense enough to force palette
    // collisions and growth.
    let n = 40;
    let mut rng = StdRng::seed_from_u64(7);
    let mut a = DenseMatrix::zeros(n);
    for i in 0..n {
        a[(i, i)] = 10.0;
        for j in (i + 1)..n {
            if rng.random_range(0..5) == 0 {
                a[(i, j)] = -1.0;
                a[(j, i)] = -1.0;
            }
        }
    }

    let coloring = color_rows_with(&a, &mut rng);
    assert_proper_partition(&a, &coloring);
    assert_eq!(coloring.num_rows(), n);
}

#[test]
fn large_complete_graph_exercises_palette_growth() {
    // max_degree 39 gives an initial palette of 5 colors for a graph that
    // needs 40, so most palettes run empty and grow before finishing.
    let n = 40;
    let mut a = DenseMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = if i == j { 2.0 } else { 0.5 };
        }
    }

    let coloring = color_rows_with(&a, &mut StdRng::seed_from_u64(11));
    assert_proper_partition(&a, &coloring);
    assert_eq!(coloring.num_colors(), n);
}
