use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use kyber_toy::kem::Kem;
use kyber_toy::params::Params;
use rand::rngs::OsRng;

fn bench_kem(c: &mut Criterion, params: Params, name: &str) {
    let mut group = c.benchmark_group(name);
    let kem = Kem::new(params);
    let mut rng = OsRng;

    group.bench_function("KeyGen", |b| {
        b.iter(|| kem.keygen(black_box(&mut rng)).unwrap())
    });

    let (ek, dk) = kem.keygen(&mut rng).unwrap();

    group.bench_function("Encaps", |b| {
        b.iter(|| kem.encapsulate(black_box(&ek), black_box(&mut rng)).unwrap())
    });

    let (ct, _ss) = kem.encapsulate(&ek, &mut rng).unwrap();

    group.bench_function("Decaps", |b| {
        b.iter(|| kem.decapsulate(black_box(&dk), black_box(&ct)).unwrap())
    });

    group.finish();
}

fn bench_kyber512(c: &mut Criterion) {
    bench_kem(c, Params::KYBER512, "kyber512");
}

fn bench_kyber768(c: &mut Criterion) {
    bench_kem(c, Params::KYBER768, "kyber768");
}

fn bench_kyber1024(c: &mut Criterion) {
    bench_kem(c, Params::KYBER1024, "kyber1024");
}

criterion_group!(benches, bench_kyber512, bench_kyber768, bench_kyber1024);
criterion_main!(benches);
