//! Seeded random cross-check of cgm against glam.
//!
//! Every iteration draws fresh inputs from a [`StdRng`] seeded with
//! [`CrossCheckConfig::seed`], evaluates each operation with both libraries
//! and records the worst relative component error per operation. Results
//! beyond the tolerance become [`Mismatch`] entries in the [`Report`].
//!
//! Operations glam has no direct counterpart for (slerp, refraction) are
//! checked against an f64 reference or a geometric property instead.

use cgm_math::{Axis, EulerMode, Mat4, Quat, Vec3, Vec4};
use glam::{Mat4 as GMat4, Quat as GQuat, Vec3 as GVec3, Vec4 as GVec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

/// Cross-check parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossCheckConfig {
    /// RNG seed; the same seed reproduces the same inputs.
    pub seed: u64,
    /// Number of random rounds; each round checks every operation once.
    pub iterations: usize,
    /// Maximum accepted relative error per component.
    pub tolerance: f32,
}

impl Default for CrossCheckConfig {
    fn default() -> Self {
        Self {
            seed: 0x0c6d_5eed,
            iterations: 1000,
            tolerance: 1e-4,
        }
    }
}

/// One failed comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Operation name.
    pub op: String,
    /// Round the failure happened in.
    pub iteration: usize,
    /// Relative error observed.
    pub error: f32,
    /// Our result, flattened.
    pub ours: Vec<f32>,
    /// Reference result, flattened.
    pub reference: Vec<f32>,
}

/// Per-operation statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpStats {
    /// Comparisons made.
    pub checks: usize,
    /// Worst relative error seen.
    pub max_error: f32,
}

/// Outcome of a cross-check run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Configuration the run used.
    pub config: Option<CrossCheckConfig>,
    /// Statistics keyed by operation name.
    pub ops: BTreeMap<String, OpStats>,
    /// Comparisons that exceeded the tolerance.
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    /// True if no comparison exceeded the tolerance.
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Total number of comparisons.
    pub fn checks(&self) -> usize {
        self.ops.values().map(|s| s.checks).sum()
    }
}

/// Relative error between two component lists, scaled by `max(1, |a|, |b|)`.
pub fn rel_error(ours: &[f32], reference: &[f32]) -> f32 {
    if ours.len() != reference.len() {
        return f32::INFINITY;
    }
    ours.iter()
        .zip(reference)
        .map(|(&a, &b)| {
            if a.is_nan() || b.is_nan() {
                return f32::INFINITY;
            }
            (a - b).abs() / 1f32.max(a.abs()).max(b.abs())
        })
        .fold(0.0, f32::max)
}

/// Runs the cross-check described by `config`.
pub fn run(config: CrossCheckConfig) -> Report {
    let mut cc = CrossCheck::new(config);
    info!(seed = config.seed, iterations = config.iterations, tolerance = config.tolerance, "cross-check");
    for i in 0..config.iterations {
        cc.round(i);
    }
    let report = cc.finish();
    if report.is_ok() {
        info!(checks = report.checks(), "all operations within tolerance");
    } else {
        warn!(mismatches = report.mismatches.len(), "cross-check failed");
    }
    report
}

struct CrossCheck {
    config: CrossCheckConfig,
    rng: StdRng,
    report: Report,
}

impl CrossCheck {
    fn new(config: CrossCheckConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            report: Report {
                config: Some(config),
                ..Default::default()
            },
        }
    }

    fn finish(self) -> Report {
        for (op, stats) in &self.report.ops {
            debug!(op = %op, checks = stats.checks, max_error = stats.max_error, "op stats");
        }
        self.report
    }

    fn check(&mut self, op: &str, iteration: usize, ours: &[f32], reference: &[f32]) {
        let error = rel_error(ours, reference);
        trace!(op, iteration, error, "compare");

        let stats = self.report.ops.entry(op.to_string()).or_default();
        stats.checks += 1;
        stats.max_error = stats.max_error.max(error);

        if error > self.config.tolerance {
            warn!(op, iteration, error, ?ours, ?reference, "mismatch");
            self.report.mismatches.push(Mismatch {
                op: op.to_string(),
                iteration,
                error,
                ours: ours.to_vec(),
                reference: reference.to_vec(),
            });
        }
    }

    // -------------------------------------------------------------------
    // Random inputs
    // -------------------------------------------------------------------

    fn scalar(&mut self, range: f32) -> f32 {
        self.rng.gen_range(-range..range)
    }

    fn vec3(&mut self, range: f32) -> Vec3 {
        Vec3::new(self.scalar(range), self.scalar(range), self.scalar(range))
    }

    fn unit3(&mut self) -> Vec3 {
        loop {
            let v = self.vec3(1.0);
            if v.length_squared() > 1e-2 {
                return v.normalize();
            }
        }
    }

    fn angle(&mut self) -> f32 {
        self.scalar(std::f32::consts::PI)
    }

    fn quat(&mut self) -> Quat {
        let axis = self.unit3();
        let angle = self.angle();
        Quat::from_axis_angle(axis, angle)
    }

    fn axis(&mut self) -> Axis {
        Axis::ALL[self.rng.gen_range(0..3usize)]
    }

    fn euler_mode(&mut self) -> EulerMode {
        EulerMode::ALL[self.rng.gen_range(0..EulerMode::ALL.len())]
    }

    /// A dense matrix with entries in `[-1, 1)`.
    fn mat4(&mut self) -> Mat4 {
        let mut a = [0.0; 16];
        for v in a.iter_mut() {
            *v = self.scalar(1.0);
        }
        Mat4::from_cols_array(a)
    }

    /// A well conditioned affine transform.
    fn trs(&mut self) -> GMat4 {
        let scale = GVec3::new(
            self.rng.gen_range(0.5..2.0),
            self.rng.gen_range(0.5..2.0),
            self.rng.gen_range(0.5..2.0),
        );
        let rot = self.quat().to_glam();
        let trans = self.vec3(10.0).to_glam();
        GMat4::from_scale_rotation_translation(scale, rot, trans)
    }

    // -------------------------------------------------------------------
    // Checks
    // -------------------------------------------------------------------

    fn round(&mut self, i: usize) {
        self.vectors(i);
        self.quaternions(i);
        self.matrices(i);
        self.transforms(i);
        self.cameras(i);
    }

    fn vectors(&mut self, i: usize) {
        let a = self.vec3(10.0);
        let b = self.vec3(10.0);
        let (ga, gb) = (a.to_glam(), b.to_glam());

        self.check("vec3.dot", i, &[a.dot(b)], &[ga.dot(gb)]);
        self.check("vec3.cross", i, &a.cross(b).to_array(), &ga.cross(gb).to_array());
        self.check("vec3.length", i, &[a.length()], &[ga.length()]);
        self.check("vec3.normalize", i, &a.normalize().to_array(), &ga.normalize().to_array());
        self.check("vec3.lerp", i, &a.lerp(b, 0.3).to_array(), &ga.lerp(gb, 0.3).to_array());

        let n = self.unit3();
        let gn = n.to_glam();
        let reflected = ga - 2.0 * ga.dot(gn) * gn;
        self.check("vec3.reflect", i, &a.reflect(n).to_array(), &reflected.to_array());

        // Snell: |sin t| = ior * |sin i| for unit directions
        let d = a.normalize();
        let ior = self.rng.gen_range(0.5..1.5);
        if let Ok(t) = d.refract(n, ior) {
            let sin_i = d.cross(n).length();
            let sin_t = t.cross(n).length();
            self.check("vec3.refract", i, &[t.length(), sin_t], &[1.0, ior * sin_i]);
        }

        let v4 = Vec4::from_vec3(a, self.scalar(2.0));
        let g4 = GVec4::from_array(v4.to_array());
        self.check("vec4.normalize", i, &v4.normalize().to_array(), &g4.normalize().to_array());
    }

    fn quaternions(&mut self, i: usize) {
        let p = self.quat();
        let q = self.quat();
        let (gp, gq) = (p.to_glam(), q.to_glam());

        self.check("quat.mul", i, &(p * q).to_array(), &(gp * gq).to_array());
        self.check("quat.inverse", i, &p.inverse().to_array(), &gp.inverse().to_array());
        self.check("quat.to_mat4", i, &p.to_mat4().to_cols_array(), &GMat4::from_quat(gp).to_cols_array());

        let axis = self.unit3();
        let angle = self.angle();
        self.check(
            "quat.from_axis_angle",
            i,
            &Quat::from_axis_angle(axis, angle).to_array(),
            &GQuat::from_axis_angle(axis.to_glam(), angle).to_array(),
        );

        let v = self.vec3(5.0);
        self.check("vec3.rotate_quat", i, &v.rotate_quat(p).to_array(), &(gp * v.to_glam()).to_array());

        // q and -q are the same rotation
        let back = Quat::from_mat4(&p.to_mat4());
        let back = if back.dot(p) < 0.0 { -back } else { back };
        self.check("quat.from_mat4", i, &back.to_array(), &p.to_array());

        let t = self.rng.gen_range(0.0..1.0);
        self.check("quat.slerp", i, &p.slerp(q, t).to_array(), &slerp_reference(p, q, t));
    }

    fn matrices(&mut self, i: usize) {
        let a = self.mat4();
        let b = self.mat4();
        let (ga, gb) = (a.to_glam(), b.to_glam());

        self.check("mat4.mul", i, &(a * b).to_cols_array(), &(ga * gb).to_cols_array());
        self.check("mat4.transpose", i, &a.transpose().to_cols_array(), &ga.transpose().to_cols_array());
        self.check("mat4.determinant", i, &[a.determinant()], &[ga.determinant()]);

        let v = Vec4::new(self.scalar(5.0), self.scalar(5.0), self.scalar(5.0), 1.0);
        let gv = GVec4::from_array(v.to_array());
        self.check("mat4.mul_vec4", i, &(a * v).to_array(), &(ga * gv).to_array());
        self.check("vec4.transform_row", i, &v.transform_row(&a).to_array(), &(ga.transpose() * gv).to_array());

        let g = self.trs();
        let m = Mat4::from_glam(g);
        match m.inverse() {
            Ok(inv) => self.check("mat4.inverse", i, &inv.to_cols_array(), &g.inverse().to_cols_array()),
            Err(e) => {
                warn!(iteration = i, "{}", e);
                self.check("mat4.inverse", i, &[f32::NAN], &[0.0]);
            }
        }
        let p = self.vec3(5.0);
        self.check("vec3.transform", i, &p.transform(&m).to_array(), &g.transform_point3(p.to_glam()).to_array());
        self.check("vec3.transform_m3", i, &p.transform_m3(&m).to_array(), &g.transform_vector3(p.to_glam()).to_array());
    }

    fn transforms(&mut self, i: usize) {
        let t = self.vec3(10.0);
        let s = Vec3::new(
            self.rng.gen_range(0.1..3.0),
            self.rng.gen_range(0.1..3.0),
            self.rng.gen_range(0.1..3.0),
        );
        self.check(
            "mat4.translation",
            i,
            &Mat4::translation(t.x, t.y, t.z).to_cols_array(),
            &GMat4::from_translation(t.to_glam()).to_cols_array(),
        );
        self.check(
            "mat4.scaling",
            i,
            &Mat4::scaling(s.x, s.y, s.z).to_cols_array(),
            &GMat4::from_scale(s.to_glam()).to_cols_array(),
        );

        let angle = self.angle();
        let axis = self.axis();
        self.check(
            "mat4.rotation_axis",
            i,
            &Mat4::rotation_axis(axis, angle).to_cols_array(),
            &glam_axis_rotation(axis, angle).to_cols_array(),
        );

        let dir = self.vec3(1.0);
        if dir.length_squared() > 1e-2 {
            self.check(
                "mat4.rotation",
                i,
                &Mat4::rotation(angle, dir).to_cols_array(),
                &GMat4::from_axis_angle(dir.normalize().to_glam(), angle).to_cols_array(),
            );
        }

        let mode = self.euler_mode();
        let (ea, eb, ec) = (self.angle(), self.angle(), self.angle());
        let [a0, a1, a2] = mode.axes();
        let reference = glam_axis_rotation(a0, ea) * glam_axis_rotation(a1, eb) * glam_axis_rotation(a2, ec);
        self.check(
            "mat4.rotation_euler",
            i,
            &Mat4::rotation_euler(ea, eb, ec, mode).to_cols_array(),
            &reference.to_cols_array(),
        );

        // Post and pre composition against explicit products
        let g = self.trs();
        let base = Mat4::from_glam(g);
        let q = self.quat();
        let mut post = base;
        post.rotate_quat(q);
        post.translate(t.x, t.y, t.z);
        let mut pre = base;
        pre.prerotate_quat(q);
        pre.prescale(s.x, s.y, s.z);
        let gq = GMat4::from_quat(q.to_glam());
        self.check(
            "mat4.post",
            i,
            &post.to_cols_array(),
            &(g * gq * GMat4::from_translation(t.to_glam())).to_cols_array(),
        );
        self.check(
            "mat4.pre",
            i,
            &pre.to_cols_array(),
            &(GMat4::from_scale(s.to_glam()) * gq * g).to_cols_array(),
        );
    }

    fn cameras(&mut self, i: usize) {
        let eye = self.vec3(10.0);
        let target = self.vec3(10.0);
        if (target - eye).length_squared() < 1e-2 {
            return;
        }
        let dir = (target - eye).normalize();
        // Skip near-degenerate up vectors
        if dir.cross(Vec3::Y).length_squared() < 1e-2 {
            return;
        }
        self.check(
            "mat4.inv_look_at",
            i,
            &Mat4::inv_look_at(eye, target, Vec3::Y).to_cols_array(),
            &GMat4::look_at_rh(eye.to_glam(), target.to_glam(), GVec3::Y).to_cols_array(),
        );

        let fov = self.rng.gen_range(0.3..2.5);
        let aspect = self.rng.gen_range(0.5..2.5);
        let near = self.rng.gen_range(0.05..1.0);
        let far = near + self.rng.gen_range(1.0..500.0);
        self.check(
            "mat4.perspective",
            i,
            &Mat4::perspective(fov, aspect, near, far).to_cols_array(),
            &GMat4::perspective_rh_gl(fov, aspect, near, far).to_cols_array(),
        );

        let (l, r) = (-self.rng.gen_range(0.5..10.0), self.rng.gen_range(0.5..10.0));
        let (b, t) = (-self.rng.gen_range(0.5..10.0), self.rng.gen_range(0.5..10.0));
        self.check(
            "mat4.ortho",
            i,
            &Mat4::ortho(l, r, b, t, near, far).to_cols_array(),
            &GMat4::orthographic_rh_gl(l, r, b, t, near, far).to_cols_array(),
        );
    }
}

fn glam_axis_rotation(axis: Axis, angle: f32) -> GMat4 {
    match axis {
        Axis::X => GMat4::from_rotation_x(angle),
        Axis::Y => GMat4::from_rotation_y(angle),
        Axis::Z => GMat4::from_rotation_z(angle),
    }
}

/// Shortest-arc slerp evaluated in f64.
fn slerp_reference(p: Quat, q: Quat, t: f32) -> [f32; 4] {
    let a = p.to_array().map(f64::from);
    let mut b = q.to_array().map(f64::from);
    let t = f64::from(t);
    let mut dot: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    if dot < 0.0 {
        b = b.map(|v| -v);
        dot = -dot;
    }
    let theta = dot.min(1.0).acos();
    let (wa, wb) = if theta < 1e-6 {
        (1.0 - t, t)
    } else {
        (((1.0 - t) * theta).sin() / theta.sin(), (t * theta).sin() / theta.sin())
    };
    std::array::from_fn(|k| (a[k] * wa + b[k] * wb) as f32)
}
