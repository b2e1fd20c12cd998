//! Criterion benchmarks for the ACO runner.
//!
//! Uses a synthetic Euclidean instance (points on a jittered circle) to
//! measure search-loop overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_aco::aco::{AcoConfig, AcoRunner};
use u_aco::graph::DistanceMatrix;

/// Points on a circle with a deterministic radial jitter.
fn circle_instance(n: usize) -> DistanceMatrix {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * std::f64::consts::TAU;
            let radius = 100.0 + ((i * 7919) % 23) as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    DistanceMatrix::from_points(&points).expect("valid instance")
}

fn bench_run(c: &mut Criterion) {
    let graph = circle_instance(20);
    let mut group = c.benchmark_group("aco_run");

    for &n_ants in &[1, 8, 32] {
        let config = AcoConfig::default()
            .with_n_ants(n_ants)
            .with_n_best(1.max(n_ants / 4))
            .with_n_iterations(50)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n_ants), &config, |b, config| {
            b.iter(|| {
                let result = AcoRunner::run(black_box(&graph), config).expect("run");
                black_box(result.best_distance)
            })
        });
    }
    group.finish();
}

fn bench_tour_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_nodes");

    for &n in &[10, 25, 50] {
        let graph = circle_instance(n);
        let config = AcoConfig::default()
            .with_n_ants(8)
            .with_n_best(2)
            .with_n_iterations(20)
            .with_seed(7);

        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let result = AcoRunner::run(black_box(graph), &config).expect("run");
                black_box(result.best_distance)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run, bench_tour_scaling);
criterion_main!(benches);
