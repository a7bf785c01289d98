use std::iter;

use criterion::Criterion;
use shabloom::{hash, BloomFilter};

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter, n: usize) {
    for _ in 0..n {
        let item = key();
        bf.insert(&item);
    }
}

fn bench_seeded_hash(c: &mut Criterion) {
    c.bench_function("hash-32", |b| {
        let item = key();

        b.iter(|| hash::seeded(item.as_bytes(), 1));
    });
}

fn bench_bloom_filter_insert(c: &mut Criterion) {
    c.bench_function("insert-1000", |b| {
        let mut bf = BloomFilter::with_params(10_000, 3).unwrap();

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });

    c.bench_function("insert-10000", |b| {
        let mut bf = BloomFilter::with_params(100_000, 7).unwrap();

        b.iter(|| {
            let item = key();
            bf.insert(&item);
        });
    });
}

fn bench_bloom_filter_check(c: &mut Criterion) {
    c.bench_function("check-1000", |b| {
        let n = 1000;
        let mut bf = BloomFilter::with_params(n * 10, 3).unwrap();
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });

    c.bench_function("check-10000", |b| {
        let n = 10000;
        let mut bf = BloomFilter::with_params(n * 10, 7).unwrap();
        populate(&mut bf, n);

        b.iter(|| {
            let item = key();
            bf.contains(&item);
        });
    });
}

criterion::criterion_group!(
    benches,
    bench_seeded_hash,
    bench_bloom_filter_insert,
    bench_bloom_filter_check
);
criterion::criterion_main!(benches);
