//! 3D vector type.
//!
//! [`Vec3`] is the point/direction type of the library. All operations take
//! the vector by value and return the result; the arithmetic operators also
//! have in-place `*Assign` forms.
//!
//! # Usage
//!
//! ```rust
//! use cgm_math::{Axis, Vec3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let v = Vec3::X.rotate_axis(Axis::Z, FRAC_PI_2);
//! assert!((v - Vec3::Y).length() < 1e-6);
//! ```

use crate::{Axis, Error, EulerMode, Mat4, Quat, Result};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use cgm_math::Vec3;
///
/// let a = Vec3::new(1.0, 0.0, 0.0);
/// let b = Vec3::new(0.0, 1.0, 0.0);
/// assert_eq!(a.cross(b), Vec3::Z);
/// assert_eq!(a[0], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    ///
    /// ```rust
    /// use cgm_math::Vec3;
    ///
    /// assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Normalizes the vector to unit length.
    ///
    /// Not guarded: a zero vector yields NaN components. Use
    /// [`normalize_or_zero`](Self::normalize_or_zero) when the input may be
    /// degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Normalizes the vector, returning the zero vector if its length is zero.
    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            Self::ZERO
        }
    }

    /// Reflects the vector about a surface normal.
    ///
    /// `n` is assumed to be unit length and is not renormalized.
    ///
    /// # Formula
    ///
    /// `v - 2 * dot(v, n) * n`
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        let d = 2.0 * self.dot(n);
        Self::new(self.x - n.x * d, self.y - n.y * d, self.z - n.z * d)
    }

    /// Refracts the vector through a surface with normal `n`.
    ///
    /// `ior` is the ratio of indices of refraction (incident / transmitted).
    /// Both `self` and `n` are expected to be unit length.
    ///
    /// # Errors
    ///
    /// [`Error::TotalInternalReflection`] when no transmitted ray exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cgm_math::Vec3;
    ///
    /// // Straight through at normal incidence
    /// let t = Vec3::new(0.0, -1.0, 0.0).refract(Vec3::Y, 1.5).unwrap();
    /// assert!((t - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);
    /// ```
    pub fn refract(self, n: Self, ior: f32) -> Result<Self> {
        let ndotv = self.dot(n);
        let k = 1.0 - ior * ior * (1.0 - ndotv * ndotv);
        if k < 0.0 {
            return Err(Error::total_internal_reflection(ior, k));
        }
        let f = ior * ndotv + k.sqrt();
        Ok(Self::new(
            ior * self.x - f * n.x,
            ior * self.y - f * n.y,
            ior * self.z - f * n.z,
        ))
    }

    /// Rotates the vector by a quaternion: `q * v * q⁻¹`.
    ///
    /// `q` does not have to be unit length; the inverse is used, not the
    /// conjugate.
    #[inline]
    pub fn rotate_quat(self, q: Quat) -> Self {
        let vq = Quat::new(self.x, self.y, self.z, 0.0);
        let r = q * vq * q.inverse();
        Self::new(r.x, r.y, r.z)
    }

    /// Rotates the vector about one of the principal axes by `angle` radians.
    #[inline]
    pub fn rotate_axis(self, axis: Axis, angle: f32) -> Self {
        self.transform_m3(&Mat4::rotation_axis(axis, angle))
    }

    /// Rotates the vector about an arbitrary axis by `angle` radians.
    ///
    /// The axis does not need to be normalized.
    #[inline]
    pub fn rotate(self, angle: f32, axis: Self) -> Self {
        self.transform_m3(&Mat4::rotation(angle, axis))
    }

    /// Rotates the vector by three Euler angles in the given ordering.
    #[inline]
    pub fn rotate_euler(self, a: f32, b: f32, c: f32, mode: EulerMode) -> Self {
        self.transform_m3(&Mat4::rotation_euler(a, b, c, mode))
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other. `t` is not clamped, so
    /// values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Transforms the vector as a point (w = 1) by a 4x4 matrix: `m * v`.
    ///
    /// The projective row is ignored; no perspective divide happens.
    #[inline]
    pub fn transform(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[4] + self.z * a[8] + a[12],
            self.x * a[1] + self.y * a[5] + self.z * a[9] + a[13],
            self.x * a[2] + self.y * a[6] + self.z * a[10] + a[14],
        )
    }

    /// Transforms the vector as a row vector (w = 1): `v * m`.
    #[inline]
    pub fn transform_row(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[1] + self.z * a[2] + a[3],
            self.x * a[4] + self.y * a[5] + self.z * a[6] + a[7],
            self.x * a[8] + self.y * a[9] + self.z * a[10] + a[11],
        )
    }

    /// Transforms the vector by the upper 3x3 block of `m`: `m3 * v`.
    ///
    /// Translation does not apply; use this for directions.
    #[inline]
    pub fn transform_m3(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[4] + self.z * a[8],
            self.x * a[1] + self.y * a[5] + self.z * a[9],
            self.x * a[2] + self.y * a[6] + self.z * a[10],
        )
    }

    /// Row-vector product with the upper 3x3 block of `m`: `v * m3`.
    #[inline]
    pub fn transform_m3_row(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[1] + self.z * a[2],
            self.x * a[4] + self.y * a[5] + self.z * a[6],
            self.x * a[8] + self.y * a[9] + self.z * a[10],
        )
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Index<Axis> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, axis: Axis) -> &f32 {
        &self[axis.index()]
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Vec3 * f32
impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

// f32 * Vec3
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

// Vec3 / f32
impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a.scale(2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        assert_eq!(c, Vec3::new(8.0, 10.0, 12.0));
    }

    #[test]
    fn test_vec3_dot_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(b).dot(a), 0.0);
        assert_eq!(a.cross(b).dot(b), 0.0);
    }

    #[test]
    fn test_vec3_length_distance() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(v.length(), 13.0);
        assert_eq!(v.length_squared(), 169.0);
        assert_eq!(Vec3::ZERO.distance(v), 13.0);
        assert_eq!(v.distance_squared(Vec3::ZERO), 169.0);
    }

    #[test]
    fn test_vec3_normalize() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert_abs_diff_eq!(n, Vec3::new(0.0, 0.6, 0.8), epsilon = 1e-6);
        assert!(Vec3::ZERO.normalize().is_nan());
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflect(Vec3::Y), Vec3::new(1.0, 1.0, 0.0));

        // Length kept, normal component negated
        let v = Vec3::new(0.3, -2.0, 1.7);
        let n = Vec3::new(1.0, 2.0, -0.5).normalize();
        let r = v.reflect(n);
        assert_abs_diff_eq!(r.length(), v.length(), epsilon = 1e-5);
        assert_abs_diff_eq!(r.dot(n), -v.dot(n), epsilon = 1e-5);
    }

    #[test]
    fn test_vec3_refract_bends_toward_normal() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = incident.refract(Vec3::Y, 1.0 / 1.5).unwrap();
        // Snell: sin(theta_t) = sin(theta_i) / 1.5
        let sin_i = incident.x;
        assert_abs_diff_eq!(t.x, sin_i / 1.5, epsilon = 1e-6);
        assert!(t.y < 0.0);
        assert_abs_diff_eq!(t.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_refract_identity_ior() {
        let incident = Vec3::new(0.3, -0.8, 0.1).normalize();
        let t = incident.refract(Vec3::Y, 1.0).unwrap();
        assert_abs_diff_eq!(t, incident, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_refract_total_internal_reflection() {
        // Grazing ray leaving a dense medium
        let incident = Vec3::new(1.0, -0.1, 0.0).normalize();
        let err = incident.refract(Vec3::Y, 1.5).unwrap_err();
        assert!(matches!(err, Error::TotalInternalReflection { .. }));
    }

    #[test]
    fn test_vec3_rotate_axis_angle() {
        let v = Vec3::X.rotate(FRAC_PI_2, Vec3::Z);
        assert_abs_diff_eq!(v, Vec3::Y, epsilon = 1e-5);

        // Axis is normalized internally
        let v = Vec3::X.rotate(FRAC_PI_2, Vec3::new(0.0, 0.0, 5.0));
        assert_abs_diff_eq!(v, Vec3::Y, epsilon = 1e-5);
    }

    #[test]
    fn test_vec3_rotate_principal() {
        assert_abs_diff_eq!(Vec3::Y.rotate_axis(Axis::X, FRAC_PI_2), Vec3::Z, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3::Z.rotate_axis(Axis::Y, FRAC_PI_2), Vec3::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3::X.rotate_axis(Axis::Z, PI), -Vec3::X, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_rotate_quat_matches_axis_angle() {
        let axis = Vec3::new(1.0, 2.0, -0.5);
        let q = Quat::from_axis_angle(axis, 0.7);
        let v = Vec3::new(0.2, -1.0, 3.0);
        assert_abs_diff_eq!(v.rotate_quat(q), v.rotate(0.7, axis), epsilon = 1e-5);
    }

    #[test]
    fn test_vec3_rotate_euler() {
        // xyz: rotate about x first, so z-rotation acts on the original vector first
        let v = Vec3::X.rotate_euler(0.0, 0.0, FRAC_PI_2, EulerMode::Xyz);
        assert_abs_diff_eq!(v, Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_lerp_extrapolates() {
        let a = Vec3::ZERO;
        let b = Vec3::ONE;
        assert_eq!(a.lerp(b, 0.5), Vec3::splat(0.5));
        assert_eq!(a.lerp(b, 2.0), Vec3::splat(2.0));
        assert_eq!(a.lerp(b, -1.0), Vec3::splat(-1.0));
    }

    #[test]
    fn test_vec3_transform_variants() {
        let m = Mat4::translation(5.0, 0.0, 0.0);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(p.transform(&m), Vec3::new(6.0, 2.0, 3.0));
        assert_eq!(p.transform_m3(&m), p);
        // Row form uses the transpose, so translation lands in w and is dropped
        assert_eq!(p.transform_row(&m), p);
        assert_eq!(p.transform_row(&m.transpose()), Vec3::new(6.0, 2.0, 3.0));

        let r = Mat4::rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(Vec3::X.transform_m3(&r), Vec3::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3::X.transform_m3_row(&r), -Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[Axis::Z], 3.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g), v);
    }
}
