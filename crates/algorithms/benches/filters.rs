//! Benchmarks for sliding-window filters

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mrelbp_algorithms::filter::{convolve, gaussian_kernel, median_filter};
use mrelbp_algorithms::standardize::local_standardize;
use mrelbp_core::{Image, PaddingPolicy, StandardizationParams};

fn create_texture(size: usize) -> Image<f64> {
    Image::from_fn(size, size, |row, col| {
        let base = ((row / 16 + col / 16) % 2) as f64;
        let variation = ((row * 7 + col * 13) % 100) as f64 / 100.0;
        base + variation
    })
}

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolve_gaussian_9");
    let kernel = gaussian_kernel(9, 5.0).unwrap();

    for size in [128, 256, 512].iter() {
        let image = create_texture(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| convolve(black_box(&kernel), black_box(&image), PaddingPolicy::Reflect).unwrap())
        });
    }

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    let image = create_texture(256);

    for kernel in [3, 5, 7].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(kernel), kernel, |b, &k| {
            b.iter(|| median_filter(black_box(&image), k).unwrap())
        });
    }

    group.finish();
}

fn bench_local_standardize(c: &mut Criterion) {
    let image = create_texture(256);
    let params = StandardizationParams::default();

    c.bench_function("local_standardize_256", |b| {
        b.iter(|| local_standardize(black_box(&image), &params).unwrap())
    });
}

criterion_group!(benches, bench_convolve, bench_median, bench_local_standardize);
criterion_main!(benches);
