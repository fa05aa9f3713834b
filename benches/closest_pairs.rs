//! Brute force against divide and conquer on seeded random datasets.

use closest_pairs::{QueryConfig, SearchStrategy, closest_k_pairs, closest_k_pairs_with_config, dataset};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

const K: usize = 10;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_k_pairs");

    for size in [500usize, 2_000, 5_000] {
        let points = dataset::random_points(&mut StdRng::seed_from_u64(size as u64), size, size as i32);
        for strategy in [SearchStrategy::BruteForce, SearchStrategy::DivideAndConquer] {
            group.bench_with_input(BenchmarkId::new(strategy.to_string(), size), &points, |b, points| {
                b.iter(|| black_box(closest_k_pairs(points, K, strategy).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_divide_and_conquer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide_and_conquer_large");
    group.sample_size(10);

    let size = 200_000;
    let points = dataset::random_points(&mut StdRng::seed_from_u64(1), size, size as i32);
    for parallel in [false, true] {
        let config = QueryConfig {
            strategy_override: Some(SearchStrategy::DivideAndConquer),
            parallel,
            ..QueryConfig::default()
        };
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(closest_k_pairs_with_config(&points, K, &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_divide_and_conquer_large);
criterion_main!(benches);
