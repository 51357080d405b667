//! 4D vector type for homogeneous coordinates.
//!
//! [`Vec4`] mirrors [`Vec3`](crate::Vec3) arithmetic and adds the matrix
//! product variants used for points, directions and normals:
//!
//! | Method | Product | `w` |
//! |---|---|---|
//! | [`transform`](Vec4::transform) | `m * v` | computed |
//! | [`transform_row`](Vec4::transform_row) | `v * m` | computed |
//! | [`transform_affine`](Vec4::transform_affine) | top 3 rows of `m` times `v` | kept |
//! | [`transform_affine_row`](Vec4::transform_affine_row) | `v` times left 3 columns of `m` | kept |
//! | [`transform_m3`](Vec4::transform_m3) | upper 3x3 times `xyz` | kept |
//! | [`transform_m3_row`](Vec4::transform_m3_row) | `xyz` times upper 3x3 | kept |

use crate::{Mat4, Quat, Vec3};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 4D vector.
///
/// # Example
///
/// ```rust
/// use cgm_math::{Mat4, Vec4};
///
/// let p = Vec4::new(0.0, 0.0, 0.0, 1.0);
/// let moved = Mat4::translation(5.0, 0.0, 0.0) * p;
/// assert_eq!(moved, Vec4::new(5.0, 0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vec4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Extends a [`Vec3`] with the given `w`.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops the `w` component.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
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

    /// Normalizes to unit length. Not guarded against zero length.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Normalizes, returning the zero vector if the length is zero.
    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            Self::ZERO
        }
    }

    /// Linear interpolation; `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
    }

    /// Full 4x4 product `m * v`.
    #[inline]
    pub fn transform(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[4] + self.z * a[8] + self.w * a[12],
            self.x * a[1] + self.y * a[5] + self.z * a[9] + self.w * a[13],
            self.x * a[2] + self.y * a[6] + self.z * a[10] + self.w * a[14],
            self.x * a[3] + self.y * a[7] + self.z * a[11] + self.w * a[15],
        )
    }

    /// Full 4x4 row-vector product `v * m`.
    #[inline]
    pub fn transform_row(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[1] + self.z * a[2] + self.w * a[3],
            self.x * a[4] + self.y * a[5] + self.z * a[6] + self.w * a[7],
            self.x * a[8] + self.y * a[9] + self.z * a[10] + self.w * a[11],
            self.x * a[12] + self.y * a[13] + self.z * a[14] + self.w * a[15],
        )
    }

    /// 3x4 product: the top three rows of `m` times `v`. `w` is unchanged.
    #[inline]
    pub fn transform_affine(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[4] + self.z * a[8] + self.w * a[12],
            self.x * a[1] + self.y * a[5] + self.z * a[9] + self.w * a[13],
            self.x * a[2] + self.y * a[6] + self.z * a[10] + self.w * a[14],
            self.w,
        )
    }

    /// 4x3 row-vector product: `v` times the left three columns of `m`.
    /// `w` is unchanged.
    #[inline]
    pub fn transform_affine_row(self, m: &Mat4) -> Self {
        let a = m.as_array();
        Self::new(
            self.x * a[0] + self.y * a[1] + self.z * a[2] + self.w * a[3],
            self.x * a[4] + self.y * a[5] + self.z * a[6] + self.w * a[7],
            self.x * a[8] + self.y * a[9] + self.z * a[10] + self.w * a[11],
            self.w,
        )
    }

    /// Upper 3x3 of `m` times `xyz`. `w` is unchanged.
    #[inline]
    pub fn transform_m3(self, m: &Mat4) -> Self {
        Self::from_vec3(self.xyz().transform_m3(m), self.w)
    }

    /// `xyz` times the upper 3x3 of `m`. `w` is unchanged.
    #[inline]
    pub fn transform_m3_row(self, m: &Mat4) -> Self {
        Self::from_vec3(self.xyz().transform_m3_row(m), self.w)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Component-wise
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl MulAssign for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.scale(self)
    }
}

// Vec4 * Mat4 (row vector)
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Vec4 {
        self.transform_row(&rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<Quat> for Vec4 {
    #[inline]
    fn from(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}
