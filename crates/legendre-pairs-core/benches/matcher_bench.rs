//! Two-pointer sweep vs exhaustive matching.
//!
//! Run with:
//! - `cargo bench -p legendre-pairs-core --bench matcher_bench`
//! - `cargo bench -p legendre-pairs-core --bench matcher_bench sweep -- --noplot`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use legendre_pairs_core::{
    find_complementary_pairs, find_pairs_exhaustive, SortedVectors, VectorKey, DEFAULT_TARGET,
};

// =============================================================================
// Helper Functions: Deterministic Data Generation
// =============================================================================

/// Deterministic vectors with components in `[-3, 1]`, the complement range
/// of the -2 target.
fn generate_vectors(count: usize, dim: usize, seed: u64) -> SortedVectors {
    let mut state = seed;
    let vectors = (0..count)
        .map(|_| {
            (0..dim)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    -3 + ((state >> 33) % 5) as i32
                })
                .collect::<Vec<i32>>()
        })
        .map(VectorKey::from)
        .collect();
    SortedVectors::new(vectors)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_sweep_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for size in [1_000usize, 10_000, 100_000] {
        let a = generate_vectors(size, 8, 17);
        let b = generate_vectors(size, 8, 23);
        group.throughput(Throughput::Elements((a.len() + b.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| find_complementary_pairs(black_box(&a), black_box(&b), DEFAULT_TARGET))
        });
    }
    group.finish();
}

fn bench_sweep_vs_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_vs_exhaustive");
    let a = generate_vectors(2_000, 8, 5);
    let b = generate_vectors(2_000, 8, 9);

    group.bench_function("sweep_2000", |bench| {
        bench.iter(|| find_complementary_pairs(black_box(&a), black_box(&b), DEFAULT_TARGET))
    });
    group.bench_function("exhaustive_2000", |bench| {
        bench.iter(|| find_pairs_exhaustive(black_box(&a), black_box(&b), DEFAULT_TARGET))
    });
    group.finish();
}

criterion_group!(benches, bench_sweep_scaling, bench_sweep_vs_exhaustive);
criterion_main!(benches);
