//! Performance benchmarks for the Transport Profile Evaluator
//!
//! Measures the two hot paths behind the interactive page:
//!
//! 1. **Profile evaluation**: one full grid sweep per slider event. The
//!    reference grid is 2040 samples; the page feels responsive as long as a
//!    sweep stays well under a frame (~16 ms), and the analytical formula is
//!    orders of magnitude below that.
//!
//! 2. **Page generation**: evaluation plus JSON embedding plus template
//!    substitution, paid once at startup.
//!
//! # Expected Scaling
//!
//! Evaluation is one erfc + one exp per sample, no coupling between samples,
//! so time should scale linearly with the grid size:
//!
//! ```text
//! samples=500:    baseline
//! samples=2040:   ~4× slower (reference grid)
//! samples=10000:  ~20× slower
//! ```
//!
//! With the `parallel` feature, grids above ~1000 samples fan out over rayon
//! and the large sizes should drop by roughly the core count.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # All evaluator benchmarks
//! cargo bench --bench evaluator_performance
//!
//! # Grid scaling only
//! cargo bench --bench evaluator_performance evaluate
//!
//! # With the rayon-backed map
//! cargo bench --features parallel --bench evaluator_performance
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use adre_rs::output::page::PageBuilder;
use adre_rs::physics::{erfc, ColumnParameters};
use adre_rs::transport::TransportEvaluator;

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Scaling of a full profile evaluation with the grid size
///
/// 500 is the coarsest grid that still renders smoothly, 2040 the reference
/// resolution, 10000 a stress case.
fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Profile Evaluation");
    let params = ColumnParameters::default();

    for samples in [500usize, 2040, 10_000].iter() {
        group.throughput(criterion::Throughput::Elements(*samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            samples,
            |b, &samples| {
                // Setup phase (not measured)
                let evaluator = TransportEvaluator::with_samples(samples);

                b.iter(|| evaluator.evaluate(black_box(&params)).unwrap());
            },
        );
    }

    group.finish();
}

/// The erfc kernel alone
///
/// One call per sample per slider event; everything else in the formula is
/// arithmetic the compiler can schedule freely.
fn benchmark_erfc_kernel(c: &mut Criterion) {
    c.bench_function("erfc kernel", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut z = -4.0;
            while z < 4.0 {
                acc += erfc(black_box(z));
                z += 0.01;
            }
            acc
        });
    });
}

/// Full page generation at the reference resolution
///
/// Startup cost: evaluate + serialize the initial curve + substitute tokens.
fn benchmark_page_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Page Generation");

    for samples in [500usize, 2040].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            samples,
            |b, &samples| {
                let builder = PageBuilder::new(ColumnParameters::default())
                    .unwrap()
                    .with_samples(samples);

                b.iter(|| builder.build().unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_evaluate,
    benchmark_erfc_kernel,
    benchmark_page_build,
);
criterion_main!(benches);
