use nebula_argon2::derivation::argon2::{Argon2Params, argon2};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_argon2id(c: &mut Criterion) {
    let params = Argon2Params::recommended();

    c.bench_function("argon2id 19 MiB t=2 p=1", |b| {
        b.iter(|| argon2(black_box(b"correct horse battery staple"), black_box(b"0123456789abcdef"), &params))
    });
}

criterion_group!(benches, bench_argon2id);
criterion_main!(benches);
