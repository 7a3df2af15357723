/// Fit and Predict Throughput Benchmarks
///
/// Measures closed-form fitting (including both metric groups and the
/// Student's t evaluations) and batch prediction across sample sizes.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use simple_linreg::regression::SimpleLinearRegression;

/// Deterministic noisy line: y = 3 + 0.5x + jitter
fn synthetic_sample(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.25).collect();
    let y = x
        .iter()
        .enumerate()
        .map(|(i, xi)| 3.0 + 0.5 * xi + ((i * 7919) % 13) as f64 * 0.1 - 0.6)
        .collect();
    (x, y)
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [10usize, 1_000, 100_000] {
        let (x, y) = synthetic_sample(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut slr = SimpleLinearRegression::new();
                slr.fit(black_box(&x), black_box(&y)).unwrap();
                black_box(slr);
            });
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    let (x, y) = synthetic_sample(1_000);
    let mut slr = SimpleLinearRegression::new();
    slr.fit(&x, &y).unwrap();

    for size in [10usize, 10_000] {
        let inputs: Vec<f64> = (0..size).map(|i| i as f64).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| black_box(slr.predict(black_box(inputs)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_predict);
criterion_main!(benches);
