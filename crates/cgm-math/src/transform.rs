//! Transform descriptions and how they compose onto a matrix.
//!
//! [`Transform`] names one of the nine transform kinds together with its
//! parameters; [`Compose`] says whether it replaces the matrix, is
//! post-multiplied or pre-multiplied. [`Mat4::apply`] dispatches to the
//! matching named method, so
//!
//! ```rust
//! use cgm_math::{Compose, Mat4, Transform, Vec3};
//!
//! let mut a = Mat4::IDENTITY;
//! a.apply(Compose::Pre, Transform::Translate(Vec3::new(1.0, 2.0, 3.0)));
//!
//! let mut b = Mat4::IDENTITY;
//! b.pretranslate(1.0, 2.0, 3.0);
//! assert_eq!(a, b);
//! ```
//!
//! This is mainly useful for data-driven chains (command line, config files).

use crate::{Axis, EulerMode, Mat4, Quat, Vec3};

/// How a transform is combined with an existing matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Compose {
    /// Replace the matrix.
    Set,
    /// `m = m * T`
    #[default]
    Post,
    /// `m = T * m`
    Pre,
}

/// One transform kind with its parameters. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Transform {
    /// Translation by a vector.
    Translate(Vec3),
    /// Non-uniform scale.
    Scale(Vec3),
    /// Rotation about X.
    RotateX(f32),
    /// Rotation about Y.
    RotateY(f32),
    /// Rotation about Z.
    RotateZ(f32),
    /// Rotation about a principal axis.
    RotateAxis {
        /// Axis selector.
        axis: Axis,
        /// Angle in radians.
        angle: f32,
    },
    /// Rotation about an arbitrary (not necessarily unit) axis.
    Rotate {
        /// Angle in radians.
        angle: f32,
        /// Rotation axis.
        axis: Vec3,
    },
    /// Euler rotation.
    Euler {
        /// Angles for the first, second and third axis of `mode`.
        angles: [f32; 3],
        /// Axis ordering.
        mode: EulerMode,
    },
    /// Rotation given by a unit quaternion.
    Quat(Quat),
}

impl Transform {
    /// The fresh matrix for this transform.
    pub fn to_mat4(&self) -> Mat4 {
        match *self {
            Self::Translate(v) => Mat4::translation(v.x, v.y, v.z),
            Self::Scale(v) => Mat4::scaling(v.x, v.y, v.z),
            Self::RotateX(a) => Mat4::rotation_x(a),
            Self::RotateY(a) => Mat4::rotation_y(a),
            Self::RotateZ(a) => Mat4::rotation_z(a),
            Self::RotateAxis { axis, angle } => Mat4::rotation_axis(axis, angle),
            Self::Rotate { angle, axis } => Mat4::rotation(angle, axis),
            Self::Euler { angles: [a, b, c], mode } => Mat4::rotation_euler(a, b, c, mode),
            Self::Quat(q) => Mat4::from_quat(q),
        }
    }

    /// Short kind name, as used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Translate(_) => "translate",
            Self::Scale(_) => "scale",
            Self::RotateX(_) => "rotate-x",
            Self::RotateY(_) => "rotate-y",
            Self::RotateZ(_) => "rotate-z",
            Self::RotateAxis { .. } => "rotate-axis",
            Self::Rotate { .. } => "rotate",
            Self::Euler { .. } => "euler",
            Self::Quat(_) => "quat",
        }
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.to_mat4()
    }
}

impl Mat4 {
    /// Combines `t` with this matrix according to `mode`.
    pub fn apply(&mut self, mode: Compose, t: Transform) {
        match mode {
            Compose::Set => *self = t.to_mat4(),
            Compose::Post => match t {
                Transform::Translate(v) => self.translate(v.x, v.y, v.z),
                Transform::Scale(v) => self.scale(v.x, v.y, v.z),
                Transform::RotateX(a) => self.rotate_x(a),
                Transform::RotateY(a) => self.rotate_y(a),
                Transform::RotateZ(a) => self.rotate_z(a),
                Transform::RotateAxis { axis, angle } => self.rotate_axis(axis, angle),
                Transform::Rotate { angle, axis } => self.rotate(angle, axis),
                Transform::Euler { angles: [a, b, c], mode } => self.rotate_euler(a, b, c, mode),
                Transform::Quat(q) => self.rotate_quat(q),
            },
            Compose::Pre => match t {
                Transform::Translate(v) => self.pretranslate(v.x, v.y, v.z),
                Transform::Scale(v) => self.prescale(v.x, v.y, v.z),
                Transform::RotateX(a) => self.prerotate_x(a),
                Transform::RotateY(a) => self.prerotate_y(a),
                Transform::RotateZ(a) => self.prerotate_z(a),
                Transform::RotateAxis { axis, angle } => self.prerotate_axis(axis, angle),
                Transform::Rotate { angle, axis } => self.prerotate(angle, axis),
                Transform::Euler { angles: [a, b, c], mode } => {
                    self.prerotate_euler(a, b, c, mode)
                }
                Transform::Quat(q) => self.prerotate_quat(q),
            },
        }
    }

    /// Applies a chain of transforms in order, starting from `self`.
    pub fn apply_all<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = (Compose, Transform)>,
    {
        for (mode, t) in chain {
            self.apply(mode, t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn all_kinds() -> Vec<Transform> {
        vec![
            Transform::Translate(Vec3::new(1.0, -2.0, 3.0)),
            Transform::Scale(Vec3::new(2.0, 0.5, 1.5)),
            Transform::RotateX(0.3),
            Transform::RotateY(-0.8),
            Transform::RotateZ(1.2),
            Transform::RotateAxis { axis: Axis::Y, angle: 0.6 },
            Transform::Rotate { angle: 0.9, axis: Vec3::new(1.0, 2.0, -1.0) },
            Transform::Euler { angles: [0.1, 0.2, 0.3], mode: EulerMode::Yzx },
            Transform::Quat(Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0), 0.7)),
        ]
    }

    fn base() -> Mat4 {
        let mut m = Mat4::rotation_x(0.4);
        m.pretranslate(3.0, 1.0, -2.0);
        m.scale(1.0, 2.0, 1.0);
        m
    }

    #[test]
    fn test_compose_set() {
        for t in all_kinds() {
            let mut m = base();
            m.apply(Compose::Set, t);
            assert_eq!(m, t.to_mat4(), "{}", t.kind());
        }
    }

    #[test]
    fn test_compose_post() {
        for t in all_kinds() {
            let mut m = base();
            m.apply(Compose::Post, t);
            assert_abs_diff_eq!(m, base() * t.to_mat4(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_compose_pre() {
        for t in all_kinds() {
            let mut m = base();
            m.apply(Compose::Pre, t);
            assert_abs_diff_eq!(m, t.to_mat4() * base(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_apply_all_order() {
        let mut m = Mat4::IDENTITY;
        m.apply_all([
            (Compose::Set, Transform::Translate(Vec3::X)),
            (Compose::Post, Transform::Scale(Vec3::splat(2.0))),
            (Compose::Pre, Transform::RotateZ(std::f32::consts::FRAC_PI_2)),
        ]);
        // scale, translate, then rotate about the origin
        let p = Vec3::X.transform(&m);
        assert_abs_diff_eq!(p, Vec3::new(0.0, 3.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_default_compose() {
        assert_eq!(Compose::default(), Compose::Post);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_transform_serde() {
        let chain = vec![
            (Compose::Set, Transform::RotateAxis { axis: Axis::Z, angle: 0.5 }),
            (Compose::Pre, Transform::Euler { angles: [0.1, 0.2, 0.3], mode: EulerMode::Zyz }),
        ];
        let json = serde_json::to_string(&chain).unwrap();
        assert!(json.contains("\"pre\""));
        let back: Vec<(Compose, Transform)> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }
}
