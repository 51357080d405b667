//! # cgm-math
//!
//! Single-precision 3D math for graphics: vectors, quaternions and 4x4
//! transform matrices.
//!
//! - [`Vec3`] - 3D vectors: geometry, reflection/refraction, rotation helpers
//! - [`Vec4`] - homogeneous vectors
//! - [`Quat`] - rotations, with lerp/slerp and matrix conversion
//! - [`Mat4`] - column-major 4x4 matrices: inverse, transform builders, camera
//! - [`Transform`] / [`Compose`] - data-driven transform chains
//!
//! # Design
//!
//! All types are plain `#[repr(C)]` structs of `f32`, `Copy`, and safe to
//! upload to a GPU as-is (see the `bytemuck` feature). Matrices are
//! **column-major** and used with **column vectors**:
//!
//! ```text
//! v' = M * v          index(row, col) = col * 4 + row
//! ```
//!
//! Row-vector variants (`v * M`) are provided as `*_row` methods.
//!
//! # Usage
//!
//! ```rust
//! use cgm_math::{EulerMode, Mat4, Quat, Vec3};
//!
//! let mut model = Mat4::translation(0.0, 1.0, -5.0);
//! model.rotate_euler(0.1, 0.2, 0.0, EulerMode::Yxz);
//! model.scale(2.0, 2.0, 2.0);
//!
//! let p = Vec3::ONE.transform(&model);
//! let q = Quat::from_mat4(&model.upper3());
//! assert!(p.is_finite() && q.is_finite());
//! ```
//!
//! # Features
//!
//! - `bytemuck` (default) - `Pod`/`Zeroable` for all types
//! - `serde` - serialization
//!
//! Tolerance comparisons come from [`approx`]: every type implements
//! `AbsDiffEq`, `RelativeEq` and `UlpsEq`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod approx_eq;
mod mat4;
mod quat;
mod transform;
mod vec3;
mod vec4;

pub use mat4::*;
pub use quat::*;
pub use transform::*;
pub use vec3::*;
pub use vec4::*;

pub use cgm_core::{Axis, Error, EulerMode, Result};

/// Re-export glam types for interop.
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
