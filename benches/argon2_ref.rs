use argon2::{Algorithm, Argon2, Params, Version};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_argon2_crate(c: &mut Criterion) {
    let params = Params::new(19 * 1024, 2, 1, Some(32)).unwrap();
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    c.bench_function("argon2::Argon2id 19 MiB t=2 p=1", |b| {
        b.iter(|| {
            let mut out = [0u8; 32];
            argon2
                .hash_password_into(
                    black_box(b"correct horse battery staple"),
                    black_box(b"0123456789abcdef"),
                    &mut out,
                )
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_argon2_crate);
criterion_main!(benches);
