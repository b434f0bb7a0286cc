use orderly::{U32BE, U32LE, U64BE};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn bench_load_store(c: &mut Criterion) {
    c.bench_function("u32 be store+load", |b| {
        b.iter(|| U32BE::new(black_box(0x12345678)).get())
    });
    c.bench_function("u32 le store+load", |b| {
        b.iter(|| U32LE::new(black_box(0x12345678)).get())
    });
}

pub fn bench_compound(c: &mut Criterion) {
    c.bench_function("u64 be add_assign x64", |b| {
        b.iter(|| {
            let mut v = U64BE::new(0);
            for i in 0..64u64 {
                v += black_box(i);
            }
            v
        })
    });
}

criterion_group!(benches, bench_load_store, bench_compound);
criterion_main!(benches);
