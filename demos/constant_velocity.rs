//! Constant-velocity demonstration: forward Kalman filter, then RTS smoothing.
//!
//! Tracks an object moving at unit velocity from noisy position measurements,
//! runs a 2-state (position, velocity) forward filter, smooths the result,
//! and reports RMS position error for measurements, filter, and smoother.
//! The forward filter lives entirely in this demo; the smoother only sees its
//! output sequences.

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rts_rs::smooth;

fn main() {
    let n = 100;
    let noise_std = 5.0;

    // Constant-velocity model: state [position, velocity], dt = 1.
    let f = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 1.0]);
    let q = DMatrix::<f64>::identity(2, 2) * 1e-4;
    let h = DVector::from_vec(vec![1.0, 0.0]);
    let r = noise_std * noise_std;

    // Noisy measurements of the true track z_t = t + noise.
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(0.0, noise_std).unwrap();
    let zs: Vec<f64> = (0..n)
        .map(|t| t as f64 + normal.sample(&mut rng))
        .collect();

    // Forward filter pass.
    let mut x = DVector::from_vec(vec![2.0, 0.0]);
    let mut p = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 0.01]);
    let eye = DMatrix::<f64>::identity(2, 2);

    let mut means = Vec::with_capacity(n);
    let mut covs = Vec::with_capacity(n);

    for &z in &zs {
        // Predict
        x = &f * x;
        p = &f * p * f.transpose() + &q;

        // Update (scalar measurement)
        let v = z - h.dot(&x);
        let p_h = &p * &h;
        let s = h.dot(&p_h) + r;
        let k_gain = p_h / s;

        x += &k_gain * v;
        // Joseph form keeps P symmetric
        let i_kh = &eye - &k_gain * h.transpose();
        p = &i_kh * p * i_kh.transpose() + &k_gain * r * k_gain.transpose();

        means.push(x.clone());
        covs.push(p.clone());
    }

    // Backward smoothing pass.
    let out = smooth(&means, &covs, &f, &q).expect("smoothing failed");

    let rms = |err: &dyn Fn(usize) -> f64| -> f64 {
        let sum: f64 = (0..n).map(|t| err(t).powi(2)).sum();
        (sum / n as f64).sqrt()
    };

    let rms_meas = rms(&|t| zs[t] - t as f64);
    let rms_filt = rms(&|t| means[t][0] - t as f64);
    let rms_smooth = rms(&|t| out.means[t][0] - t as f64);

    println!("RMS position error over {} steps (truth: unit slope)", n);
    println!("  measurements: {:8.4}", rms_meas);
    println!("  filtered:     {:8.4}", rms_filt);
    println!("  smoothed:     {:8.4}", rms_smooth);
    println!(
        "final smoothed state: pos={:.4} vel={:.4}",
        out.means[n - 1][0],
        out.means[n - 1][1]
    );
}
