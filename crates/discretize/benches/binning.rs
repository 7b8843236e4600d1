use criterion::{black_box, criterion_group, criterion_main, Criterion};
use discretize::{ScalarBinner, VectorBinner};

fn bench_scalar_bin(c: &mut Criterion) {
    let binner = ScalarBinner::new(64, 1.0, -1.0).unwrap();
    c.bench_function("scalar_bin_64", |b| b.iter(|| binner.bin(black_box(0.3217))));
}

fn bench_vector_bin(c: &mut Criterion) {
    let dims = 16;
    let binner =
        VectorBinner::from_slices(&vec![32; dims], &vec![-5.0; dims], &vec![5.0; dims]).unwrap();
    let mut rng = fastrand::Rng::with_seed(1);
    let point: Vec<f32> = (0..dims).map(|_| rng.f32() * 10.0 - 5.0).collect();
    c.bench_function("vector_bin_16x32", |b| b.iter(|| binner.bin_slice(black_box(&point))));
}

criterion_group!(benches, bench_scalar_bin, bench_vector_bin);
criterion_main!(benches);
