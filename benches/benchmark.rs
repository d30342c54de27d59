//! Benchmarks for the cipher operations.
//!
//! Measures Caesar and Bellaso throughput on a fixed message and the
//! alphabet-membership predicate, plus throughput scaling across input
//! sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shiftcipher::{decrypt_bellaso, decrypt_caesar, encrypt_bellaso, encrypt_caesar, is_in_alphabet};

/// Message used consistently across the fixed-size benchmarks.
const BENCH_TEXT: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG_0123456789";

/// Key used for the Bellaso benchmarks.
const BENCH_KEY: &str = "LEMON";

fn bench_is_in_alphabet(c: &mut Criterion) {
    c.bench_function("is_in_alphabet", |b| {
        b.iter(|| is_in_alphabet(black_box(BENCH_TEXT)));
    });
}

fn bench_caesar(c: &mut Criterion) {
    let cipher = encrypt_caesar(BENCH_TEXT, 17).unwrap();

    let mut group = c.benchmark_group("caesar");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));
    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt_caesar(black_box(BENCH_TEXT), black_box(17)).unwrap());
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt_caesar(black_box(&cipher), black_box(17)));
    });
    group.finish();
}

fn bench_bellaso(c: &mut Criterion) {
    let cipher = encrypt_bellaso(BENCH_TEXT, BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("bellaso");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));
    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt_bellaso(black_box(BENCH_TEXT), black_box(BENCH_KEY)).unwrap());
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt_bellaso(black_box(&cipher), black_box(BENCH_KEY)).unwrap());
    });
    group.finish();
}

/// Caesar encryption throughput across input sizes.
fn bench_caesar_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("caesar_encrypt_scaling");
    for size in [64usize, 1024, 16384] {
        let text: String = (0..size).map(|i| char::from(32 + (i % 64) as u8)).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| encrypt_caesar(black_box(text), black_box(29)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_is_in_alphabet,
    bench_caesar,
    bench_bellaso,
    bench_caesar_scaling
);
criterion_main!(benches);
