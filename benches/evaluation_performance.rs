//! Performance benchmarks for the separation model
//!
//! # What We're Measuring
//!
//! 1. **Single evaluation**: the full forward pass (validation, retention,
//!    geometry, ordering, resolution) for the three-component table. This is
//!    what an interactive caller re-runs on every slider change.
//!
//! 2. **Batch evaluation**: many independent parameter sets against the same
//!    table, as a caller pre-rendering several scenarios would do.
//!
//! 3. **Chromatogram sampling**: dense Gaussian trace generation at various
//!    resolutions, the dominant cost when a collaborator wants plot data.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all model benchmarks
//! cargo bench --bench evaluation_performance
//!
//! # Only the sampling group
//! cargo bench --bench evaluation_performance sampling
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use hplc_rs::chemistry::ReferenceTable;
use hplc_rs::instrument::InstrumentParameters;
use hplc_rs::model::{evaluate, evaluate_many};
use hplc_rs::signal::Chromatogram;

// =================================================================================================
// Single Evaluation
// =================================================================================================

fn bench_single_evaluation(c: &mut Criterion) {
    let table = ReferenceTable::dorflex();
    let params = InstrumentParameters::new(1.2, 30.0, 60.0).unwrap();

    c.bench_function("evaluate/dorflex", |b| {
        b.iter(|| evaluate(black_box(&table), black_box(&params)).unwrap())
    });

    let challenge = ReferenceTable::coelution_challenge();
    c.bench_function("evaluate/coelution_challenge", |b| {
        b.iter(|| evaluate(black_box(&challenge), black_box(&params)).unwrap())
    });
}

// =================================================================================================
// Batch Evaluation
// =================================================================================================

fn bench_batch_evaluation(c: &mut Criterion) {
    let table = ReferenceTable::dorflex();

    let mut group = c.benchmark_group("evaluate_many");
    for size in [16usize, 256, 1024] {
        let batch: Vec<InstrumentParameters> = (0..size)
            .map(|i| {
                let t = i as f64 / size as f64;
                InstrumentParameters::new(0.5 + 1.5 * t, 25.0 + 15.0 * t, 10.0 + 80.0 * t)
                    .unwrap()
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| evaluate_many(black_box(&table), black_box(batch)).unwrap())
        });
    }
    group.finish();
}

// =================================================================================================
// Chromatogram Sampling
// =================================================================================================

fn bench_sampling(c: &mut Criterion) {
    let table = ReferenceTable::dorflex();
    let params = InstrumentParameters::reference();
    let separation = evaluate(&table, &params).unwrap();

    let mut group = c.benchmark_group("sampling");
    for points in [500usize, 2000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(points),
            &points,
            |b, &points| {
                b.iter(|| {
                    Chromatogram::sample(black_box(&separation), 0.0, 20.0, points).unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_batch_evaluation,
    bench_sampling
);
criterion_main!(benches);
