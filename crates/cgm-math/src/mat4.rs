//! 4x4 matrix type for transforms.
//!
//! [`Mat4`] is 16 contiguous `f32` in **column-major** order (OpenGL
//! convention), used with **column vectors**:
//!
//! ```text
//! index = col * 4 + row
//!
//! | m[0] m[4] m[8]  m[12] |   | x |
//! | m[1] m[5] m[9]  m[13] | * | y |
//! | m[2] m[6] m[10] m[14] |   | z |
//! | m[3] m[7] m[11] m[15] |   | w |
//! ```
//!
//! Logical 3x3 operations use the upper-left block of the same matrix.
//!
//! # Composition
//!
//! Every transform kind comes in three flavours:
//!
//! | Flavour | Example | Effect |
//! |---|---|---|
//! | set | [`Mat4::translation`] | fresh matrix |
//! | post-multiply | [`Mat4::translate`] | `m = m * T`: `T` acts in the matrix's current frame |
//! | pre-multiply | [`Mat4::pretranslate`] | `m = T * m`: `T` acts in the parent frame |
//!
//! With column vectors the rightmost factor touches the vector first, so a
//! post-multiplied transform is applied *before* everything already in the
//! matrix, and a pre-multiplied one *after*.
//!
//! # Usage
//!
//! ```rust
//! use cgm_math::{Mat4, Vec3};
//!
//! let mut m = Mat4::translation(5.0, 0.0, 0.0);
//! m.scale(2.0, 2.0, 2.0);
//! // Scale happens first, then the translation
//! assert_eq!(Vec3::ONE.transform(&m), Vec3::new(7.0, 2.0, 2.0));
//! ```

use crate::{Axis, Error, EulerMode, Quat, Result, Vec3, Vec4};
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 4x4 column-major matrix.
///
/// Element `(row, col)` is stored at index `col * 4 + row`. Use
/// [`get`](Mat4::get)/[`set`](Mat4::set) or `m[(row, col)]` instead of raw
/// index arithmetic; [`as_array`](Mat4::as_array) exposes the raw layout for
/// GPU upload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from 16 floats in column-major order.
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Returns the 16 floats in column-major order.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Borrows the raw column-major storage.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Mutably borrows the raw column-major storage.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        &mut self.m
    }

    /// Creates a matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            m: [
                c0.x, c0.y, c0.z, c0.w, //
                c1.x, c1.y, c1.z, c1.w, //
                c2.x, c2.y, c2.z, c2.w, //
                c3.x, c3.y, c3.z, c3.w,
            ],
        }
    }

    /// Creates a matrix from row arrays, as it would be written on paper.
    ///
    /// ```rust
    /// use cgm_math::Mat4;
    ///
    /// let m = Mat4::from_rows([
    ///     [1.0, 0.0, 0.0, 5.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Mat4::translation(5.0, 0.0, 0.0));
    /// ```
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Self::ZERO;
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                m.set(r, c, v);
            }
        }
        m
    }

    /// Flat storage index of `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in `0..4`.
    #[inline]
    const fn idx(row: usize, col: usize) -> usize {
        assert!(row < 4 && col < 4, "Mat4 index out of range");
        col * 4 + row
    }

    /// Element at `(row, col)`. Panics if either index is not in `0..4`.
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.m[Self::idx(row, col)]
    }

    /// Sets the element at `(row, col)`. Panics if either index is not in `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        self.m[Self::idx(row, col)] = v;
    }

    /// Column `c` as a vector.
    #[inline]
    pub fn col(&self, c: usize) -> Vec4 {
        let i = Self::idx(0, c);
        Vec4::new(self.m[i], self.m[i + 1], self.m[i + 2], self.m[i + 3])
    }

    /// Row `r` as a vector.
    #[inline]
    pub fn row(&self, r: usize) -> Vec4 {
        let _ = Self::idx(r, 0);
        Vec4::new(self.m[r], self.m[4 + r], self.m[8 + r], self.m[12 + r])
    }

    /// Translation part (column 3, `xyz`).
    #[inline]
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Matrix product `self * other`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut res = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                res.m[c * 4 + r] = self.get(r, 0) * other.get(0, c)
                    + self.get(r, 1) * other.get(1, c)
                    + self.get(r, 2) * other.get(2, c)
                    + self.get(r, 3) * other.get(3, c);
            }
        }
        res
    }

    /// Left-multiplies in place: `self = other * self`.
    ///
    /// The counterpart of `*=`, which right-multiplies.
    #[inline]
    pub fn premul(&mut self, other: &Self) {
        *self = other.mul_mat(self);
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut res = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                res.set(c, r, self.get(r, c));
            }
        }
        res
    }

    /// Clears row 3 and column 3 to the identity-affine `(0, 0, 0, 1)`,
    /// keeping only the upper 3x3 block.
    pub fn upper3(&self) -> Self {
        let mut res = *self;
        for i in 0..3 {
            res.set(3, i, 0.0);
            res.set(i, 3, 0.0);
        }
        res.set(3, 3, 1.0);
        res
    }

    /// Deletes `row` and `col`, returning the 3x3 minor matrix in the
    /// upper-left block (row/column 3 are identity-affine).
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in `0..4`.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        let _ = Self::idx(row, col);
        let mut res = Self::IDENTITY;
        let mut si = 0;
        for r in (0..4).filter(|&r| r != row) {
            let mut sj = 0;
            for c in (0..4).filter(|&c| c != col) {
                res.set(si, sj, self.get(r, c));
                sj += 1;
            }
            si += 1;
        }
        res
    }

    /// Determinant of the upper 3x3 block.
    fn det3(&self) -> f32 {
        let m = |r, c| self.get(r, c);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Minor: determinant of the 3x3 matrix left after deleting `row` and `col`.
    #[inline]
    pub fn subdet(&self, row: usize, col: usize) -> f32 {
        self.submatrix(row, col).det3()
    }

    /// Signed minor: `(-1)^(row + col) * subdet(row, col)`.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let min = self.subdet(row, col);
        if (row + col) & 1 == 1 { -min } else { min }
    }

    /// Determinant, by cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|c| self.get(0, c) * self.cofactor(0, c)).sum()
    }

    /// Matrix of cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        let mut res = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                res.set(r, c, self.cofactor(r, c));
            }
        }
        res
    }

    /// Adjugate: transpose of the cofactor matrix.
    #[inline]
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Inverse, computed as `adjugate / determinant`.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if the determinant is exactly zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cgm_math::Mat4;
    ///
    /// let m = Mat4::scaling(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat4::scaling(0.5, 0.25, 0.125));
    /// assert!(Mat4::ZERO.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(Error::singular(det));
        }
        let inv_det = 1.0 / det;
        let mut res = self.adjugate();
        for v in res.m.iter_mut() {
            *v *= inv_det;
        }
        Ok(res)
    }

    /// Inverts in place.
    ///
    /// On failure the matrix is left untouched.
    #[inline]
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Set: fresh transforms
    // ---------------------------------------------------------------------

    /// Translation matrix.
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut res = Self::IDENTITY;
        res.m[12] = x;
        res.m[13] = y;
        res.m[14] = z;
        res
    }

    /// Scaling matrix.
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        let mut res = Self::IDENTITY;
        res.m[0] = sx;
        res.m[5] = sy;
        res.m[10] = sz;
        res
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut res = Self::IDENTITY;
        res.m[5] = c;
        res.m[6] = s;
        res.m[9] = -s;
        res.m[10] = c;
        res
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut res = Self::IDENTITY;
        res.m[0] = c;
        res.m[2] = -s;
        res.m[8] = s;
        res.m[10] = c;
        res
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut res = Self::IDENTITY;
        res.m[0] = c;
        res.m[1] = s;
        res.m[4] = -s;
        res.m[5] = c;
        res
    }

    /// Rotation about a principal axis.
    #[inline]
    pub fn rotation_axis(axis: Axis, angle: f32) -> Self {
        match axis {
            Axis::X => Self::rotation_x(angle),
            Axis::Y => Self::rotation_y(angle),
            Axis::Z => Self::rotation_z(angle),
        }
    }

    /// Rotation of `angle` radians about an arbitrary axis.
    ///
    /// The axis is normalized internally.
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let (sa, ca) = angle.sin_cos();
        let invca = 1.0 - ca;
        let (xsq, ysq, zsq) = (x * x, y * y, z * z);

        let mut res = Self::IDENTITY;
        res.set(0, 0, xsq + (1.0 - xsq) * ca);
        res.set(0, 1, x * y * invca - z * sa);
        res.set(0, 2, x * z * invca + y * sa);

        res.set(1, 0, x * y * invca + z * sa);
        res.set(1, 1, ysq + (1.0 - ysq) * ca);
        res.set(1, 2, y * z * invca - x * sa);

        res.set(2, 0, x * z * invca - y * sa);
        res.set(2, 1, y * z * invca + x * sa);
        res.set(2, 2, zsq + (1.0 - zsq) * ca);
        res
    }

    /// Rotation by three Euler angles.
    ///
    /// `a`, `b`, `c` rotate about the first, second and third axis of
    /// `mode`. The result is `R(axis0, a) * R(axis1, b) * R(axis2, c)`:
    /// intrinsic rotations in name order, or equivalently extrinsic
    /// rotations in reverse name order.
    ///
    /// ```rust
    /// use cgm_math::{EulerMode, Mat4};
    ///
    /// let e = Mat4::rotation_euler(0.1, 0.2, 0.3, EulerMode::Zxy);
    /// let m = Mat4::rotation_z(0.1) * Mat4::rotation_x(0.2) * Mat4::rotation_y(0.3);
    /// assert_eq!(e, m);
    /// ```
    pub fn rotation_euler(a: f32, b: f32, c: f32, mode: EulerMode) -> Self {
        let [a0, a1, a2] = mode.axes();
        let mut res = Self::rotation_axis(a0, a);
        res.rotate_axis(a1, b);
        res.rotate_axis(a2, c);
        res
    }

    /// Rotation matrix from a (unit) quaternion.
    #[inline]
    pub fn from_quat(q: Quat) -> Self {
        q.to_mat4()
    }

    // ---------------------------------------------------------------------
    // Post-multiply: m = m * T
    // ---------------------------------------------------------------------

    /// `self = self * translation(x, y, z)`.
    #[inline]
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        *self *= Self::translation(x, y, z);
    }

    /// `self = self * scaling(sx, sy, sz)`.
    #[inline]
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        *self *= Self::scaling(sx, sy, sz);
    }

    /// `self = self * rotation_x(angle)`.
    #[inline]
    pub fn rotate_x(&mut self, angle: f32) {
        *self *= Self::rotation_x(angle);
    }

    /// `self = self * rotation_y(angle)`.
    #[inline]
    pub fn rotate_y(&mut self, angle: f32) {
        *self *= Self::rotation_y(angle);
    }

    /// `self = self * rotation_z(angle)`.
    #[inline]
    pub fn rotate_z(&mut self, angle: f32) {
        *self *= Self::rotation_z(angle);
    }

    /// `self = self * rotation_axis(axis, angle)`.
    #[inline]
    pub fn rotate_axis(&mut self, axis: Axis, angle: f32) {
        *self *= Self::rotation_axis(axis, angle);
    }

    /// `self = self * rotation(angle, axis)`.
    #[inline]
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        *self *= Self::rotation(angle, axis);
    }

    /// `self = self * rotation_euler(a, b, c, mode)`.
    #[inline]
    pub fn rotate_euler(&mut self, a: f32, b: f32, c: f32, mode: EulerMode) {
        *self *= Self::rotation_euler(a, b, c, mode);
    }

    /// `self = self * from_quat(q)`.
    #[inline]
    pub fn rotate_quat(&mut self, q: Quat) {
        *self *= Self::from_quat(q);
    }

    // ---------------------------------------------------------------------
    // Pre-multiply: m = T * m
    // ---------------------------------------------------------------------

    /// `self = translation(x, y, z) * self`.
    #[inline]
    pub fn pretranslate(&mut self, x: f32, y: f32, z: f32) {
        self.premul(&Self::translation(x, y, z));
    }

    /// `self = scaling(sx, sy, sz) * self`.
    #[inline]
    pub fn prescale(&mut self, sx: f32, sy: f32, sz: f32) {
        self.premul(&Self::scaling(sx, sy, sz));
    }

    /// `self = rotation_x(angle) * self`.
    #[inline]
    pub fn prerotate_x(&mut self, angle: f32) {
        self.premul(&Self::rotation_x(angle));
    }

    /// `self = rotation_y(angle) * self`.
    #[inline]
    pub fn prerotate_y(&mut self, angle: f32) {
        self.premul(&Self::rotation_y(angle));
    }

    /// `self = rotation_z(angle) * self`.
    #[inline]
    pub fn prerotate_z(&mut self, angle: f32) {
        self.premul(&Self::rotation_z(angle));
    }

    /// `self = rotation_axis(axis, angle) * self`.
    #[inline]
    pub fn prerotate_axis(&mut self, axis: Axis, angle: f32) {
        self.premul(&Self::rotation_axis(axis, angle));
    }

    /// `self = rotation(angle, axis) * self`.
    #[inline]
    pub fn prerotate(&mut self, angle: f32, axis: Vec3) {
        self.premul(&Self::rotation(angle, axis));
    }

    /// `self = rotation_euler(a, b, c, mode) * self`.
    #[inline]
    pub fn prerotate_euler(&mut self, a: f32, b: f32, c: f32, mode: EulerMode) {
        self.premul(&Self::rotation_euler(a, b, c, mode));
    }

    /// `self = from_quat(q) * self`.
    #[inline]
    pub fn prerotate_quat(&mut self, q: Quat) {
        self.premul(&Self::from_quat(q));
    }

    // ---------------------------------------------------------------------
    // Camera
    // ---------------------------------------------------------------------

    /// Camera-to-world matrix of a camera at `eye` looking at `target`.
    ///
    /// The camera looks down its local -Z axis with +Y up (right handed).
    /// [`inv_look_at`](Self::inv_look_at) is the matching view matrix.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let dir = (target - eye).normalize();
        let right = dir.cross(up).normalize();
        let vup = right.cross(dir);

        Self::from_cols(
            Vec4::from_vec3(right, 0.0),
            Vec4::from_vec3(vup, 0.0),
            Vec4::from_vec3(-dir, 0.0),
            Vec4::from_vec3(eye, 1.0),
        )
    }

    /// View (world-to-camera) matrix; the inverse of [`look_at`](Self::look_at).
    pub fn inv_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let dir = (target - eye).normalize();
        let right = dir.cross(up).normalize();
        let vup = right.cross(dir);

        Self::from_rows([
            [right.x, right.y, right.z, -right.dot(eye)],
            [vup.x, vup.y, vup.z, -vup.dot(eye)],
            [-dir.x, -dir.y, -dir.z, dir.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Perspective projection to OpenGL clip space (`z` in `[-1, 1]`).
    ///
    /// `fov_y` is the full vertical field of view in radians.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (0.5 * fov_y).tan();
        let range = near - far;

        let mut res = Self::ZERO;
        res.set(0, 0, f / aspect);
        res.set(1, 1, f);
        res.set(2, 2, (near + far) / range);
        res.set(2, 3, 2.0 * near * far / range);
        res.set(3, 2, -1.0);
        res
    }

    /// Perspective projection from an explicit view volume (`glFrustum`).
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let (dx, dy, dz) = (right - left, top - bottom, far - near);

        let mut res = Self::ZERO;
        res.set(0, 0, 2.0 * near / dx);
        res.set(1, 1, 2.0 * near / dy);
        res.set(0, 2, (right + left) / dx);
        res.set(1, 2, (top + bottom) / dy);
        res.set(2, 2, -(far + near) / dz);
        res.set(2, 3, -2.0 * far * near / dz);
        res.set(3, 2, -1.0);
        res
    }

    /// Orthographic projection to OpenGL clip space (`glOrtho`).
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let (dx, dy, dz) = (right - left, top - bottom, far - near);

        let mut res = Self::IDENTITY;
        res.set(0, 0, 2.0 / dx);
        res.set(1, 1, 2.0 / dy);
        res.set(2, 2, -2.0 / dz);
        res.set(0, 3, -(right + left) / dx);
        res.set(1, 3, -(top + bottom) / dy);
        res.set(2, 3, -(far + near) / dz);
        res
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4 (both column-major, no transpose).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[Self::idx(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.m[Self::idx(row, col)]
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 *= Mat4 (right-multiply)
impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.transform(&self)
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self::from_cols_array(m)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> [f32; 16] {
        m.to_cols_array()
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_mat4_layout() {
        let m = Mat4::translation(5.0, 6.0, 7.0);
        assert_eq!(m.as_array()[12], 5.0);
        assert_eq!(m.get(1, 3), 6.0);
        assert_eq!(m[(2, 3)], 7.0);
        assert_eq!(m.col(3), Vec4::new(5.0, 6.0, 7.0, 1.0));
        assert_eq!(m.row(0), Vec4::new(1.0, 0.0, 0.0, 5.0));
        assert_eq!(m.translation_part(), Vec3::new(5.0, 6.0, 7.0));
    }

    #[test]
    fn test_mat4_from_cols_matches_array() {
        let m = Mat4::from_cols(Vec4::X, Vec4::Y * 2.0, Vec4::Z * 3.0, Vec4::W);
        assert_eq!(m, Mat4::scaling(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mat4_identity() {
        let m = sample();
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_mat4_mul_order() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let s = Mat4::scaling(2.0, 2.0, 2.0);
        let p = Vec4::new(1.0, 0.0, 0.0, 1.0);
        // t * s: scale then translate
        assert_eq!((t * s) * p, Vec4::new(3.0, 0.0, 0.0, 1.0));
        // s * t: translate then scale
        assert_eq!((s * t) * p, Vec4::new(4.0, 0.0, 0.0, 1.0));

        let mut a = t;
        a *= s;
        assert_eq!(a, t * s);
        let mut b = t;
        b.premul(&s);
        assert_eq!(b, s * t);
    }

    #[test]
    fn test_mat4_transpose_involution() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().get(0, 2), m.get(2, 0));
    }

    #[test]
    fn test_mat4_upper3() {
        let m = Mat4::from_cols_array(std::array::from_fn(|i| i as f32 + 1.0)).upper3();
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m.col(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m.get(2, 2), 11.0);
    }

    #[test]
    fn test_mat4_submatrix() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let sub = m.submatrix(1, 2);
        let expected = Mat4::from_rows([
            [1.0, 2.0, 4.0, 0.0],
            [9.0, 10.0, 12.0, 0.0],
            [13.0, 14.0, 16.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(sub, expected);
    }

    #[test]
    #[should_panic(expected = "Mat4 index out of range")]
    fn test_mat4_get_row_out_of_range() {
        // (4, 0) would otherwise land on the storage slot of (0, 1)
        let _ = sample().get(4, 0);
    }

    #[test]
    #[should_panic(expected = "Mat4 index out of range")]
    fn test_mat4_set_out_of_range() {
        let mut m = Mat4::IDENTITY;
        m.set(0, 4, 1.0);
    }

    #[test]
    #[should_panic(expected = "Mat4 index out of range")]
    fn test_mat4_index_out_of_range() {
        let _ = sample()[(4, 1)];
    }

    #[test]
    #[should_panic(expected = "Mat4 index out of range")]
    fn test_mat4_row_out_of_range() {
        let _ = sample().row(4);
    }

    #[test]
    #[should_panic(expected = "Mat4 index out of range")]
    fn test_mat4_submatrix_out_of_range() {
        let _ = sample().submatrix(4, 0);
    }

    #[test]
    #[should_panic(expected = "Mat4 index out of range")]
    fn test_mat4_cofactor_out_of_range() {
        let _ = sample().cofactor(0, 7);
    }

    #[test]
    fn test_mat4_cofactor_sign() {
        let m = sample();
        assert_eq!(m.cofactor(0, 1), -m.subdet(0, 1));
        assert_eq!(m.cofactor(1, 1), m.subdet(1, 1));
    }

    #[test]
    fn test_mat4_determinant() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::scaling(2.0, 3.0, 4.0).determinant(), 24.0);
        // Upper 3x3 of sample: 2*(12-0) - 0 + 1*(1-0) = 25
        assert_eq!(sample().determinant(), 25.0);
    }

    #[test]
    fn test_mat4_inverse_identity_exact() {
        assert_eq!(Mat4::IDENTITY.inverse().unwrap(), Mat4::IDENTITY);
    }

    #[test]
    fn test_mat4_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Mat4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(inv * m, Mat4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(inv.inverse().unwrap(), m, epsilon = 1e-4);
    }

    #[test]
    fn test_mat4_singular_untouched() {
        let mut m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ]);
        let before = m;
        let err = m.invert().unwrap_err();
        assert_eq!(err, Error::singular(0.0));
        assert_eq!(m, before);
    }

    #[test]
    fn test_mat4_translation_point() {
        let m = Mat4::translation(5.0, 0.0, 0.0);
        assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(5.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mat4_principal_rotations() {
        let x = Vec3::X;
        assert_abs_diff_eq!(x.transform_m3(&Mat4::rotation_z(FRAC_PI_2)), Vec3::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3::Y.transform_m3(&Mat4::rotation_x(FRAC_PI_2)), Vec3::Z, epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3::Z.transform_m3(&Mat4::rotation_y(FRAC_PI_2)), x, epsilon = 1e-6);
        for (axis, unit) in Axis::ALL.into_iter().zip([Vec3::X, Vec3::Y, Vec3::Z]) {
            assert_abs_diff_eq!(
                Mat4::rotation_axis(axis, 0.4),
                Mat4::rotation(0.4, unit),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_mat4_rotation_arbitrary_axis() {
        let m = Mat4::rotation(FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        let v = Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(m * v, Vec4::new(0.0, 1.0, 0.0, 1.0), epsilon = 1e-5);
        // Rotation matrices are orthonormal
        let r = Mat4::rotation(1.3, Vec3::new(1.0, -1.0, 2.0));
        assert_abs_diff_eq!(r * r.transpose(), Mat4::IDENTITY, epsilon = 1e-6);
        assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_mat4_post_and_pre_translate() {
        let mut post = Mat4::rotation_z(FRAC_PI_2);
        post.translate(1.0, 0.0, 0.0);
        // Translation happens in the rotated frame: +X becomes +Y
        assert_abs_diff_eq!(post.translation_part(), Vec3::Y, epsilon = 1e-6);

        let mut pre = Mat4::rotation_z(FRAC_PI_2);
        pre.pretranslate(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(pre.translation_part(), Vec3::X, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_scale_variants() {
        let mut post = Mat4::translation(1.0, 1.0, 1.0);
        post.scale(2.0, 3.0, 4.0);
        assert_eq!(post.translation_part(), Vec3::ONE);

        let mut pre = Mat4::translation(1.0, 1.0, 1.0);
        pre.prescale(2.0, 3.0, 4.0);
        assert_eq!(pre.translation_part(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mat4_euler_matches_axis_products() {
        let (a, b, c) = (0.3, -0.7, 1.1);
        for mode in EulerMode::ALL {
            let [a0, a1, a2] = mode.axes();
            let expected = Mat4::rotation_axis(a0, a)
                * Mat4::rotation_axis(a1, b)
                * Mat4::rotation_axis(a2, c);
            assert_eq!(Mat4::rotation_euler(a, b, c, mode), expected, "{mode}");
        }
    }

    #[test]
    fn test_mat4_euler_quarter_turns() {
        // Three quarter turns applied to (1, 2, 3)
        let cases = [
            (EulerMode::Xyz, [3.0, -2.0, 1.0]),
            (EulerMode::Xzy, [-2.0, 1.0, 3.0]),
            (EulerMode::Yxz, [1.0, -3.0, 2.0]),
            (EulerMode::Yzx, [2.0, 1.0, -3.0]),
            (EulerMode::Zxy, [-1.0, 3.0, 2.0]),
            (EulerMode::Zyx, [3.0, 2.0, -1.0]),
            (EulerMode::Zxz, [3.0, -2.0, 1.0]),
            (EulerMode::Zyz, [-1.0, 3.0, 2.0]),
            (EulerMode::Yxy, [2.0, 1.0, -3.0]),
            (EulerMode::Yzy, [-1.0, 3.0, 2.0]),
            (EulerMode::Xyx, [2.0, 1.0, -3.0]),
            (EulerMode::Xzx, [3.0, -2.0, 1.0]),
        ];
        let v = Vec3::new(1.0, 2.0, 3.0);
        for (mode, expected) in cases {
            let m = Mat4::rotation_euler(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2, mode);
            assert_abs_diff_eq!(v.transform_m3(&m), Vec3::from_array(expected), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_mat4_quat_variants() {
        let q = Quat::from_axis_angle(Vec3::Y, PI / 3.0);
        let r = Mat4::rotation_y(PI / 3.0);
        assert_abs_diff_eq!(Mat4::from_quat(q), r, epsilon = 1e-6);

        let base = Mat4::translation(1.0, 2.0, 3.0);
        let mut post = base;
        post.rotate_quat(q);
        assert_abs_diff_eq!(post, base * r, epsilon = 1e-6);
        let mut pre = base;
        pre.prerotate_quat(q);
        assert_abs_diff_eq!(pre, r * base, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_look_at() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let cam = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);
        // Looking down -Z from +Z: camera frame equals world frame, moved to eye
        assert_abs_diff_eq!(cam, Mat4::translation(0.0, 0.0, 5.0), epsilon = 1e-6);

        let eye = Vec3::new(3.0, 2.0, -4.0);
        let target = Vec3::new(-1.0, 0.5, 2.0);
        let cam = Mat4::look_at(eye, target, Vec3::Y);
        let view = Mat4::inv_look_at(eye, target, Vec3::Y);
        assert_abs_diff_eq!(cam * view, Mat4::IDENTITY, epsilon = 1e-5);
        // The target sits on the view's -Z axis
        let t = target.transform(&view);
        assert_abs_diff_eq!(t.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(t.y, 0.0, epsilon = 1e-5);
        assert!(t.z < 0.0);
    }

    #[test]
    fn test_mat4_perspective_maps_near_far() {
        let p = Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        let near = p * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -10.0, 1.0);
        assert_abs_diff_eq!(near.z / near.w, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z / far.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_mat4_frustum_matches_perspective() {
        let (fov, aspect, n, f) = (1.0f32, 1.5, 0.5, 50.0);
        let h = n * (fov * 0.5).tan();
        let w = h * aspect;
        assert_abs_diff_eq!(
            Mat4::frustum(-w, w, -h, h, n, f),
            Mat4::perspective(fov, aspect, n, f),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_mat4_ortho() {
        let o = Mat4::ortho(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        assert_abs_diff_eq!(o * Vec4::new(2.0, 1.0, -10.0, 1.0), Vec4::ONE, epsilon = 1e-6);
        assert_abs_diff_eq!(o * Vec4::new(-2.0, -1.0, 0.0, 1.0), -Vec4::ONE + Vec4::W * 2.0, epsilon = 1e-6);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_mat4_pod_layout() {
        let ms = [Mat4::translation(1.0, 2.0, 3.0), Mat4::IDENTITY];
        let floats: &[f32] = bytemuck::cast_slice(&ms);
        assert_eq!(floats.len(), 32);
        assert_eq!(&floats[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(floats[16], 1.0);
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = sample();
        let g: glam::Mat4 = m.into();
        assert_eq!(g.col(3).to_array(), m.col(3).to_array());
        assert_eq!(Mat4::from(g), m);
    }
}
