use citypref_core::normalize::normalize_list;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn city_tokens(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let name = format!("city-{:05}", (i * 7919) % n);
            if i % 3 == 0 {
                name.to_uppercase()
            } else {
                name
            }
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let small = city_tokens(50);
    let large = city_tokens(5_000);

    c.bench_function("normalize 50 unpinned", |b| {
        b.iter(|| normalize_list(black_box(&small), None))
    });
    c.bench_function("normalize 5k pinned", |b| {
        b.iter(|| normalize_list(black_box(&large), Some("city-02500")))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
