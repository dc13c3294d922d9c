//! Criterion benchmarks for the exact solvers across instance sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_core::Instance;
use tsp_exhaustive::ExhaustiveSolver;
use tsp_held_karp::HeldKarpSolver;
use tsp_validation::{sweep::generate_instance, SweepConfig};

fn random_instance(n: usize, seed: u64) -> Instance {
    let config = SweepConfig {
        min_cities: n,
        max_cities: n,
        seed,
        ..SweepConfig::default()
    };
    Instance::new(generate_instance(&config, 0)).expect("should build instance")
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");

    for size in [6, 8, 9].iter() {
        let instance = random_instance(*size, 42);

        group.bench_with_input(BenchmarkId::new("cities", size), size, |b, _| {
            b.iter(|| {
                ExhaustiveSolver::new(black_box(&instance))
                    .expect("within capacity")
                    .solve()
            });
        });
    }

    group.finish();
}

fn bench_held_karp(c: &mut Criterion) {
    let mut group = c.benchmark_group("held-karp");

    for size in [6, 9, 12, 15].iter() {
        let instance = random_instance(*size, 42);

        group.bench_with_input(BenchmarkId::new("cities", size), size, |b, _| {
            b.iter(|| {
                HeldKarpSolver::new(black_box(&instance))
                    .expect("within capacity")
                    .solve()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exhaustive, bench_held_karp);
criterion_main!(benches);
