//! Benchmarks for the X11KVS algorithm

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use x11kvs::{pow_hash, x11kv, x11kvs};

fn bench_pow_hash(c: &mut Criterion) {
    let header = [0u8; 80];

    c.bench_function("x11kvs_pow_hash", |b| {
        b.iter(|| pow_hash(black_box(&header)).unwrap())
    });
}

fn bench_leaf(c: &mut Criterion) {
    let header = [0u8; 80];

    c.bench_function("x11kv_leaf", |b| b.iter(|| x11kv(black_box(&header)).unwrap()));
}

fn bench_tree_levels(c: &mut Criterion) {
    let header = [0u8; 80];

    for level in [3u32, 5, 7] {
        c.bench_function(&format!("x11kvs_level_{level}"), |b| {
            b.iter(|| x11kvs(black_box(&header), level).unwrap())
        });
    }
}

fn bench_varying_nonce(c: &mut Criterion) {
    c.bench_function("x11kvs_varying_nonce", |b| {
        let mut nonce: u32 = 0;
        b.iter(|| {
            let mut header = [0u8; 80];
            header[76..].copy_from_slice(&nonce.to_le_bytes());
            nonce = nonce.wrapping_add(1);
            pow_hash(black_box(&header)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_pow_hash,
    bench_leaf,
    bench_tree_levels,
    bench_varying_nonce
);
criterion_main!(benches);
