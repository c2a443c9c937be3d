//! Benchmarks for the Luhn engine.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cardgen_worker::service::luhn::{check_digit, generate_batch, is_valid_luhn};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    group.bench_function("plain_16", |b| {
        b.iter(|| is_valid_luhn(black_box("4111111111111111")));
    });
    group.bench_function("separated_16", |b| {
        b.iter(|| is_valid_luhn(black_box("4111 1111-1111 1111")));
    });
    group.bench_function("malformed", |b| {
        b.iter(|| is_valid_luhn(black_box("4111 1111 x111 1111")));
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut rng = StdRng::seed_from_u64(0);

    group.bench_function("visa_x100", |b| {
        b.iter(|| generate_batch(black_box("4"), 16, 100, &mut rng));
    });
    group.bench_function("check_digit", |b| {
        b.iter(|| check_digit(black_box("411111111111111")));
    });

    group.finish();
}

criterion_group!(benches, bench_validate, bench_generate);
criterion_main!(benches);
