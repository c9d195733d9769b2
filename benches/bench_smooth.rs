use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::{DMatrix, DVector};
use rts_rs::smooth;

/// Synthetic 4-state constant-velocity filter output, 200 steps.
fn make_inputs() -> (Vec<DVector<f64>>, Vec<DMatrix<f64>>, DMatrix<f64>, DMatrix<f64>) {
    let d = 4;
    let n = 200;
    let dt = 0.1;

    let mut f = DMatrix::<f64>::identity(d, d);
    f[(0, 2)] = dt;
    f[(1, 3)] = dt;
    let q = DMatrix::<f64>::identity(d, d) * 1e-3;

    let means = (0..n)
        .map(|k| {
            let t = k as f64 * dt;
            DVector::from_vec(vec![t, 0.5 * t, 1.0, 0.5])
        })
        .collect();
    let covs = (0..n)
        .map(|k| DMatrix::<f64>::identity(d, d) * (1.0 + 0.01 * (k % 7) as f64))
        .collect();

    (means, covs, f, q)
}

fn bench_smooth_200x4(c: &mut Criterion) {
    let (means, covs, f, q) = make_inputs();
    c.bench_function("smooth_200_steps_4_states", |b| {
        b.iter(|| {
            let out = smooth(&means, &covs, &f, &q).unwrap();
            std::hint::black_box(out)
        })
    });
}

criterion_group!(benches, bench_smooth_200x4);
criterion_main!(benches);
