//! Benchmark for RedBlackTree vs standard BTreeSet.
//!
//! Compares the persistent tree against Rust's standard BTreeSet for
//! insertion, lookup and traversal, plus the cost of contents equality.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use persistent_rbtree::persistent::RedBlackTree;
use std::collections::BTreeSet;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for index in 0..size {
                        tree = tree.insert(black_box(index));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = BTreeSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// lookup Benchmark
// =============================================================================

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup");

    for size in [100, 1000, 10000] {
        let tree: RedBlackTree<i32> = (0..size).collect();
        let set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for value in 0..size {
                        if tree.contains(&black_box(value)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for value in 0..size {
                        if set.contains(&black_box(value)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let tree: RedBlackTree<i64> = (0..size).collect();
        let set: BTreeSet<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("RedBlackTree::iter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree.iter().sum::<i64>()));
        });

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree::iter_sorted", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(tree.iter_sorted().sum::<i64>()));
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.iter().sum::<i64>()));
        });
    }

    group.finish();
}

// =============================================================================
// equality Benchmark
// =============================================================================

fn benchmark_equality(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("equality");

    for size in [100, 1000, 10000] {
        let ascending: RedBlackTree<i32> = (0..size).collect();
        let descending: RedBlackTree<i32> = (0..size).rev().collect();

        group.bench_with_input(
            BenchmarkId::new("different_shapes", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(ascending == descending));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_lookup,
    benchmark_traversal,
    benchmark_equality
);

criterion_main!(benches);
