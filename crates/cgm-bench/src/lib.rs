//! Benchmark inputs for cgm.
//!
//! The benchmarks themselves live in `benches/cgm_bench.rs`; this crate only
//! builds deterministic inputs so runs are comparable.

use cgm_core::EulerMode;
use cgm_math::{Mat4, Quat, Vec3};

/// `n` affine transforms with distinct rotation, scale and translation.
pub fn transforms(n: usize) -> Vec<Mat4> {
    (0..n)
        .map(|i| {
            let f = i as f32 * 0.37;
            let mut m = Mat4::rotation_euler(f, f * 0.5, -f, EulerMode::ALL[i % EulerMode::ALL.len()]);
            m.prescale(1.0 + (f * 0.1).sin().abs(), 1.5, 0.75);
            m.pretranslate(f.cos() * 10.0, f.sin() * 10.0, f);
            m
        })
        .collect()
}

/// `n` points spread over a cube of half-size 10.
pub fn points(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Vec3::new((f * 0.13).sin(), (f * 0.29).cos(), (f * 0.71).sin()) * 10.0
        })
        .collect()
}

/// `n` unit quaternions.
pub fn quats(n: usize) -> Vec<Quat> {
    (0..n)
        .map(|i| {
            let f = i as f32 * 0.61;
            Quat::from_axis_angle(Vec3::new(f.sin(), f.cos(), 0.5), f)
        })
        .collect()
}
