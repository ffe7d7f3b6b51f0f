//! Criterion benchmarks for the annealing search.
//!
//! Uses uniformly random city clouds to measure loop overhead and the
//! cost evaluator independently.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tsp_anneal::sa::{AnnealConfig, AnnealRunner};
use tsp_anneal::tour::{identity_tour, random_tour, tour_cost, City};

fn random_cities(n: usize, rng: &mut SmallRng) -> Vec<City> {
    (0..n)
        .map(|_| City {
            x: rng.random_range(0..1000),
            y: rng.random_range(0..1000),
        })
        .collect()
}

fn bench_tour_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_cost");
    for &n in &[32usize, 131, 512] {
        let mut rng = SmallRng::seed_from_u64(7);
        let cities = random_cities(n, &mut rng);
        let tour = identity_tour(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| tour_cost(black_box(&tour), black_box(&cities)).unwrap());
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);
    for &n in &[16usize, 64, 131] {
        let mut rng = SmallRng::seed_from_u64(7);
        let cities = random_cities(n, &mut rng);
        let config = AnnealConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let initial = random_tour(cities.len(), &mut rng);
                AnnealRunner::run(black_box(&cities), initial, &config).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tour_cost, bench_anneal);
criterion_main!(benches);
