//! Tolerance comparisons via the [`approx`] traits.
//!
//! All types compare component-wise, so `assert_abs_diff_eq!(a, b, epsilon = 1e-5)`
//! works for vectors, quaternions and matrices alike.

use crate::{Mat4, Quat, Vec3, Vec4};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

macro_rules! impl_approx_eq {
    ($ty:ty, $components:ident) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.$components()
                    .iter()
                    .zip(other.$components().iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.$components()
                    .iter()
                    .zip(other.$components().iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                f32::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.$components()
                    .iter()
                    .zip(other.$components().iter())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

impl_approx_eq!(Vec3, to_array);
impl_approx_eq!(Vec4, to_array);
impl_approx_eq!(Quat, to_array);
impl_approx_eq!(Mat4, to_cols_array);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, assert_ulps_eq, relative_ne};

    #[test]
    fn test_vec_approx() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = a + Vec3::splat(1e-7);
        assert!(a.abs_diff_eq(&b, 1e-6));
        assert!(!a.abs_diff_eq(&(a + Vec3::X), 1e-6));
        assert_relative_eq!(Vec4::from_vec3(a, 1.0), Vec4::from_vec3(b, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mat_approx() {
        let m = Mat4::rotation_x(0.5);
        assert_ulps_eq!(m, m);
        assert!(relative_ne!(m, Mat4::IDENTITY));
    }

    #[test]
    fn test_quat_approx() {
        let q = Quat::from_axis_angle(Vec3::Z, 0.25);
        assert!(q.abs_diff_eq(&q.normalize(), 1e-6));
    }
}
