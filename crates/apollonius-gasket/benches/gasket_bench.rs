//! Benchmarks for Apollonian gasket generation
//!
//! Measures performance of:
//! - Bend walk on generating and deep triples
//! - Seed construction for each entry point
//! - Full expansion at increasing bend bounds

use apollonius_gasket::{
    bend_walk, from_bends, from_centers_pair, seed_from_bends, seed_from_centers_pair,
    seed_from_centers_triplet, Complex, GasketLimits,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark the bend walk
fn bench_bend_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bend_walk");

    let triples = [(2.0, 2.0, 3.0), (2.0, 3.0, 15.0), (2.0, 3.0, 10.0)];
    for (b1, b2, b3) in triples {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}-{}-{}", b1, b2, b3)),
            &(b1, b2, b3),
            |b, &(b1, b2, b3)| b.iter(|| bend_walk(black_box(b1), black_box(b2), black_box(b3))),
        );
    }
    group.finish();
}

/// Benchmark seed construction
fn bench_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");

    group.bench_function("bends", |b| {
        b.iter(|| seed_from_bends(black_box(2.0), black_box(2.0), black_box(3.0)))
    });
    group.bench_function("pair", |b| {
        b.iter(|| {
            seed_from_centers_pair(
                black_box(Complex::new(0.5, 0.0)),
                black_box(Complex::new(-0.5, 0.0)),
            )
        })
    });
    group.bench_function("triplet", |b| {
        b.iter(|| {
            seed_from_centers_triplet(
                black_box(Complex::ZERO),
                black_box(Complex::new(3.0, 0.0)),
                black_box(Complex::new(0.0, 4.0)),
            )
        })
    });
    group.finish();
}

/// Benchmark full expansion at increasing bend bounds
fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");

    for &max_bend in &[50.0, 100.0, 500.0, 2000.0] {
        let circles = from_bends(2.0, 2.0, 3.0, GasketLimits::new(max_bend, usize::MAX))
            .map(|g| g.len())
            .unwrap_or(0);
        group.throughput(Throughput::Elements(circles as u64));
        group.bench_with_input(
            BenchmarkId::new("max_bend", max_bend),
            &max_bend,
            |b, &max_bend| {
                b.iter(|| from_bends(2.0, 2.0, 3.0, GasketLimits::new(black_box(max_bend), usize::MAX)))
            },
        );
    }
    group.finish();
}

/// Benchmark count-bounded expansion
fn bench_count_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_bound");

    for &max_count in &[100usize, 1000, 10_000] {
        group.throughput(Throughput::Elements(max_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(max_count),
            &max_count,
            |b, &n| {
                b.iter(|| {
                    from_centers_pair(
                        (0.5, 0.0),
                        (-0.5, 0.0),
                        GasketLimits::new(f64::INFINITY, black_box(n)),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bend_walk,
    bench_seeds,
    bench_expansion,
    bench_count_bound,
);
criterion_main!(benches);
