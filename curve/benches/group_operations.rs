use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{mul_generator, scalar_mul, Point, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> ScalarField {
    ScalarField::random(rng)
}

fn bench_point_double(c: &mut Criterion) {
    let g = Point::generator();
    c.bench_function("point_double", |bencher| {
        bencher.iter(|| black_box(black_box(g).double()))
    });
}

fn bench_point_add_distinct(c: &mut Criterion) {
    let g = Point::generator();
    let h = mul_generator(&ScalarField::from_canonical_u64(2)).expect("2G");
    c.bench_function("point_add_distinct", |bencher| {
        bencher.iter(|| black_box(black_box(g).add_distinct(black_box(&h))))
    });
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(mul_generator(black_box(&scalar))))
    });
}

fn bench_mul_generator_sparse(c: &mut Criterion) {
    // Same cost as a dense scalar: the ladder never exits early
    let scalar = ScalarField::ONE;

    c.bench_function("mul_generator_sparse", |bencher| {
        bencher.iter(|| black_box(mul_generator(black_box(&scalar))))
    });
}

fn bench_scalar_mul_variable_base(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let base = mul_generator(&random_scalar(&mut rng)).expect("canonical scalar");
    let scalar = random_scalar(&mut rng);

    c.bench_function("scalar_mul_variable_base", |bencher| {
        bencher.iter(|| black_box(scalar_mul(black_box(&base), black_box(&scalar))))
    });
}

criterion_group!(
    benches,
    bench_point_double,
    bench_point_add_distinct,
    bench_mul_generator,
    bench_mul_generator_sparse,
    bench_scalar_mul_variable_base
);
criterion_main!(benches);
