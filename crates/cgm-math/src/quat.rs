//! Quaternion type for rotations.
//!
//! [`Quat`] stores `w + xi + yj + zk` with `w` as the real part. Rotations are
//! unit quaternions; the algebra (`+`, `-`, `*`) is defined for any
//! quaternion.
//!
//! # Composition order
//!
//! `a * b` is the Hamilton product and means "apply `b`, then `a`":
//!
//! ```rust
//! use cgm_math::{Quat, Vec3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let about_z = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
//! let about_x = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
//!
//! // X -> Y (about z), then Y -> Z (about x)
//! let v = Vec3::X.rotate_quat(about_x * about_z);
//! assert!((v - Vec3::Z).length() < 1e-6);
//! ```

use crate::{Mat4, Vec3, Vec4};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Dot product above which [`Quat::slerp`] falls back to normalized lerp.
const SLERP_LERP_THRESHOLD: f32 = 0.9995;

/// A quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// X component of the vector part
    pub x: f32,
    /// Y component of the vector part
    pub y: f32,
    /// Z component of the vector part
    pub z: f32,
    /// Real part
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The vector (imaginary) part.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized internally.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        let (sin_ha, cos_ha) = (angle * 0.5).sin_cos();
        Self::new(axis.x * sin_ha, axis.y * sin_ha, axis.z * sin_ha, cos_ha)
    }

    /// Composes a rotation about `axis` onto this quaternion:
    /// `self = self * from_axis_angle(axis, angle)`.
    #[inline]
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        *self = *self * Self::from_axis_angle(axis, angle);
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (norm).
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length. Not guarded against zero length.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse: conjugate divided by the squared length.
    ///
    /// Equals [`conjugate`](Self::conjugate) for unit quaternions.
    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        let c = self.conjugate();
        Self::new(c.x / len_sq, c.y / len_sq, c.z / len_sq, c.w / len_sq)
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Componentwise linear interpolation. The result is not renormalized.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// If the quaternions lie in opposite hemispheres, `other` is negated
    /// first. Nearly parallel inputs fall back to normalized lerp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cgm_math::{Quat, Vec3};
    ///
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_axis_angle(Vec3::Y, 1.0);
    /// let half = a.slerp(b, 0.5);
    /// let expected = Quat::from_axis_angle(Vec3::Y, 0.5);
    /// assert!((half.dot(expected) - 1.0).abs() < 1e-6);
    /// ```
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut other = other;
        let mut dot = self.dot(other);
        if dot < 0.0 {
            other = -other;
            dot = -dot;
        }

        if dot > SLERP_LERP_THRESHOLD {
            return self.lerp(other, t).normalize();
        }

        let angle = dot.min(1.0).acos();
        let sin_angle = angle.sin();
        let a = ((1.0 - t) * angle).sin() / sin_angle;
        let b = (t * angle).sin() / sin_angle;
        self.scale(a) + other.scale(b)
    }

    /// Rotation matrix equivalent to this (unit) quaternion.
    pub fn to_mat4(self) -> Mat4 {
        let Self { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::from_cols_array([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Extracts the rotation from the upper 3x3 block of `m`.
    ///
    /// The block must be a pure rotation (orthonormal, determinant 1).
    /// The sign of the result is unspecified: `q` and `-q` are the same
    /// rotation.
    pub fn from_mat4(m: &Mat4) -> Self {
        let (m00, m01, m02) = (m.get(0, 0), m.get(0, 1), m.get(0, 2));
        let (m10, m11, m12) = (m.get(1, 0), m.get(1, 1), m.get(1, 2));
        let (m20, m21, m22) = (m.get(2, 0), m.get(2, 1), m.get(2, 2));
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(x, y, z, w)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl AddAssign for Quat {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl SubAssign for Quat {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Hamilton product
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<Vec4> for Quat {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> glam::Quat {
        q.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quat_identity_mul() {
        let q = Quat::new(0.1, 0.2, 0.3, 0.9);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::IDENTITY * q, q);
    }

    #[test]
    fn test_quat_hamilton_units() {
        let i = Quat::new(1.0, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        let k = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, Quat::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_quat_add_sub() {
        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quat::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quat::new(0.5, 1.5, 2.5, 3.5));
        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_quat_conjugate_inverse() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::new(-1.0, -2.0, -3.0, 4.0));
        assert_abs_diff_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-6);

        let unit = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.8);
        assert_abs_diff_eq!(unit.inverse(), unit.conjugate(), epsilon = 1e-6);
    }

    #[test]
    fn test_quat_normalize() {
        let q = Quat::new(0.0, 0.0, 3.0, 4.0).normalize();
        assert_abs_diff_eq!(q, Quat::new(0.0, 0.0, 0.6, 0.8), epsilon = 1e-6);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quat_from_axis_angle_normalizes() {
        let a = Quat::from_axis_angle(Vec3::new(0.0, 10.0, 0.0), PI);
        assert_abs_diff_eq!(a, Quat::new(0.0, 1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_quat_rotate_composes_on_the_right() {
        let mut q = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
        q.rotate(Vec3::Z, FRAC_PI_2);
        // Z rotation applies first: X -> Y, then X rotation: Y -> Z
        assert_abs_diff_eq!(Vec3::X.rotate_quat(q), Vec3::Z, epsilon = 1e-6);
    }

    #[test]
    fn test_quat_slerp_endpoints_and_midpoint() {
        let a = Quat::from_axis_angle(Vec3::Z, 0.2);
        let b = Quat::from_axis_angle(Vec3::Z, 1.4);
        assert_abs_diff_eq!(a.slerp(b, 0.0), a, epsilon = 1e-6);
        assert_abs_diff_eq!(a.slerp(b, 1.0), b, epsilon = 1e-6);
        assert_abs_diff_eq!(a.slerp(b, 0.5), Quat::from_axis_angle(Vec3::Z, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn test_quat_slerp_same_is_identity() {
        let a = Quat::from_axis_angle(Vec3::new(0.3, -1.0, 2.0), 2.1);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0, 1.5] {
            assert_abs_diff_eq!(a.slerp(a, t), a, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_quat_slerp_shortest_arc() {
        let a = Quat::from_axis_angle(Vec3::Y, 0.1);
        // Same rotation as angle 0.3 but in the opposite hemisphere
        let b = -Quat::from_axis_angle(Vec3::Y, 0.3);
        let mid = a.slerp(b, 0.5);
        let expected = Quat::from_axis_angle(Vec3::Y, 0.2);
        // Long way round would land near angle 0.2 + PI
        assert_abs_diff_eq!(mid.dot(expected).abs(), 1.0, epsilon = 1e-5);
        assert!(mid.dot(a) > 0.0);
    }

    #[test]
    fn test_quat_lerp_not_normalized() {
        let a = Quat::IDENTITY;
        let b = Quat::new(0.0, 1.0, 0.0, 0.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Quat::new(0.0, 0.5, 0.0, 0.5));
        assert!(mid.length() < 1.0);
    }

    #[test]
    fn test_quat_matrix_roundtrip() {
        let axes = [
            Vec3::X,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.3, 0.1, -2.0),
        ];
        for axis in axes {
            for angle in [0.3, 1.7, 3.0, -2.5] {
                let q = Quat::from_axis_angle(axis, angle);
                let back = Quat::from_mat4(&q.to_mat4());
                assert_abs_diff_eq!(back.dot(q).abs(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_quat_to_mat4_matches_axis_angle_matrix() {
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let q = Quat::from_axis_angle(axis, 1.1);
        assert_abs_diff_eq!(q.to_mat4(), Mat4::rotation(1.1, axis), epsilon = 1e-5);
    }
}
