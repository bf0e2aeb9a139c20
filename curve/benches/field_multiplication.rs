use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{BaseField, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_basefield_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = BaseField::random(&mut rng);
    let b = BaseField::random(&mut rng);
    c.bench_function("basefield_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_basefield_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = BaseField::random(&mut rng);
    c.bench_function("basefield_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(a).try_inverse()))
    });
}

fn bench_scalarfield_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = ScalarField::random(&mut rng);
    let b = ScalarField::random(&mut rng);
    c.bench_function("scalarfield_add", |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)))
    });
}

criterion_group!(
    benches,
    bench_basefield_mul,
    bench_basefield_inverse,
    bench_scalarfield_add
);
criterion_main!(benches);
