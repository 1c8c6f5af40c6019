use criterion::{criterion_group, criterion_main, Criterion};
use phoneiso_core::{append_u64, E164, E212};
use std::hint::black_box;

const TEST_NUM: u64 = 4566118311;
const TEST_STRING: &str = "4566118311";

fn bench_e164(c: &mut Criterion) {
    let mut group = c.benchmark_group("e164");

    group.bench_function("lookup", |b| b.iter(|| E164.lookup(black_box(TEST_NUM))));

    // Interesting if you plan to look up a lot of numbers
    group.bench_function("lookup_prealloc", |b| {
        let mut buf = Vec::with_capacity(16);
        b.iter(|| {
            buf.clear();
            let digits = append_u64(&mut buf, black_box(TEST_NUM));
            E164.lookup_bytes(digits).len()
        })
    });

    group.bench_function("lookup_with_buf", |b| {
        let mut buf = Vec::with_capacity(16);
        b.iter(|| E164.lookup_with_buf(&mut buf, black_box(TEST_NUM)).len())
    });

    group.bench_function("lookup_str", |b| {
        b.iter(|| E164.lookup_str(black_box(TEST_STRING)))
    });

    group.bench_function("lookup_bytes", |b| {
        let m = TEST_STRING.as_bytes();
        b.iter(|| E164.lookup_bytes(black_box(m)))
    });

    group.bench_function("lookup_no_match", |b| {
        b.iter(|| E164.lookup(black_box(8_000_000_000_000)))
    });

    group.finish();
}

fn bench_e212(c: &mut Criterion) {
    c.bench_function("e212/lookup", |b| {
        b.iter(|| E212.lookup(black_box(340), black_box(12)))
    });
    c.bench_function("e212/network_name", |b| {
        b.iter(|| E212.network_name(black_box(238), black_box(1)))
    });
}

criterion_group!(benches, bench_e164, bench_e212);
criterion_main!(benches);
