use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cumprod_core::algorithms::{cumulative_product, last_product};

fn bench_cumulative_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative_product");

    for size in [100, 10_000, 1_000_000] {
        // Values near one keep the running product finite.
        let values: Vec<f64> = (0..size).map(|i| 1.0 + (i % 7) as f64 * 1e-6).collect();

        group.bench_with_input(BenchmarkId::new("full", size), &values, |b, values| {
            b.iter(|| cumulative_product(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("last", size), &values, |b, values| {
            b.iter(|| last_product(black_box(values)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cumulative_product);
criterion_main!(benches);
