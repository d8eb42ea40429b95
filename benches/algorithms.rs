use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;
use symbios_cover::operators::{crossover::crossover, init, mutation::mutate, selection};
use symbios_cover::reference::{REFERENCE_RADIUS, reference_matrix};
use symbios_cover::{Candidate, CoverSearch, CoverageModel, DistanceMatrix, SearchConfig};

// =============================================================================
// Instances
// =============================================================================

/// Farms scattered uniformly in a square whose side grows with `n`, so the
/// average reach stays roughly constant.
fn scattered_model(n: usize, seed: u64) -> CoverageModel {
    let mut rng = Pcg64::seed_from_u64(seed);
    let side = (n as f64).sqrt() * 5.0;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..side), rng.random_range(0.0..side)))
        .collect();
    let rows = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                .collect()
        })
        .collect();
    CoverageModel::new(DistanceMatrix::new(rows).unwrap(), 8.0).unwrap()
}

// =============================================================================
// Coverage
// =============================================================================

fn bench_covered_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("covered_count");

    for n in [40, 200, 1000] {
        let model = scattered_model(n, 42);
        let mut rng = Pcg64::seed_from_u64(1);
        let candidate = init::greedy_candidate(&model, &mut rng).unwrap();

        group.throughput(Throughput::Elements(candidate.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &candidate, |b, cand| {
            b.iter(|| black_box(model.covered_count(black_box(cand))));
        });
    }

    group.finish();
}

// =============================================================================
// Operators
// =============================================================================

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for n in [40, 200, 1000] {
        let model = scattered_model(n, 42);
        let mut rng = Pcg64::seed_from_u64(2);
        let (population, _) = init::build_initial_population(100, &model, &mut rng).unwrap();
        let a: Candidate = population[0].candidate.clone();
        let b: Candidate = population[1].candidate.clone();

        group.bench_with_input(BenchmarkId::new("greedy_candidate", n), &n, |bench, _| {
            let mut rng = Pcg64::seed_from_u64(3);
            bench.iter(|| black_box(init::greedy_candidate(&model, &mut rng).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("crossover", n), &n, |bench, _| {
            let mut rng = Pcg64::seed_from_u64(4);
            bench.iter(|| black_box(crossover(&a, &b, &model, &mut rng).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("mutate", n), &n, |bench, _| {
            let mut rng = Pcg64::seed_from_u64(5);
            bench.iter(|| black_box(mutate(&a, &model, &mut rng).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("select_parents", n), &n, |bench, _| {
            let mut rng = Pcg64::seed_from_u64(6);
            bench.iter(|| black_box(selection::select_parents(&population, 10, &mut rng).unwrap()));
        });
    }

    group.finish();
}

// =============================================================================
// Full search
// =============================================================================

fn bench_reference_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_search");
    group.sample_size(10);

    for population in [100, 1000] {
        let config = SearchConfig {
            radius: REFERENCE_RADIUS,
            max_stagnation: 10,
            ..SearchConfig::default().with_population(population)
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut search = CoverSearch::new(reference_matrix(), config.clone()).unwrap();
                    black_box(search.run().unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_covered_count,
    bench_operators,
    bench_reference_search
);
criterion_main!(benches);
