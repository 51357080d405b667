//! Error types for cgm operations.
//!
//! The math core is made of total functions over the float domain, with
//! only a handful of operations that can fail:
//!
//! - Matrix inversion of a singular matrix
//! - Refraction under total internal reflection
//! - Parsing or converting axis / Euler-mode selectors
//!
//! Failures are returned to the immediate caller as values. Nothing in the
//! core panics, retries or logs.
//!
//! # Usage
//!
//! ```rust
//! use cgm_core::{Error, Result};
//!
//! fn checked_inverse_scale(s: f32) -> Result<f32> {
//!     if s == 0.0 {
//!         return Err(Error::SingularMatrix { det: 0.0 });
//!     }
//!     Ok(1.0 / s)
//! }
//!
//! assert!(checked_inverse_scale(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cgm operations.
///
/// # Categories
///
/// - **Numeric failures**: [`SingularMatrix`](Error::SingularMatrix),
///   [`TotalInternalReflection`](Error::TotalInternalReflection)
/// - **Selector errors**: [`InvalidAxis`](Error::InvalidAxis),
///   [`UnknownEulerMode`](Error::UnknownEulerMode)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The matrix has a zero determinant and cannot be inverted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cgm_core::Error;
    ///
    /// let err = Error::SingularMatrix { det: 0.0 };
    /// assert!(err.to_string().contains("singular"));
    /// ```
    #[error("matrix is singular (determinant {det})")]
    SingularMatrix {
        /// Determinant that was computed
        det: f32,
    },

    /// Refraction is undefined because the ray is totally internally reflected.
    ///
    /// Returned when the discriminant `k = 1 - ior² (1 - (n·v)²)` is negative.
    #[error("total internal reflection (ior {ior}, discriminant {k})")]
    TotalInternalReflection {
        /// Index of refraction ratio that was used
        ior: f32,
        /// Negative discriminant
        k: f32,
    },

    /// Principal axis index outside `0..=2`.
    #[error("invalid axis index {0}, expected 0 (x), 1 (y) or 2 (z)")]
    InvalidAxis(usize),

    /// Euler mode name that is not one of the twelve orderings.
    #[error("unknown euler mode: {0}")]
    UnknownEulerMode(String),
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(det: f32) -> Self {
        Self::SingularMatrix { det }
    }

    /// Creates an [`Error::TotalInternalReflection`] error.
    #[inline]
    pub fn total_internal_reflection(ior: f32, k: f32) -> Self {
        Self::TotalInternalReflection { ior, k }
    }

    /// Creates an [`Error::UnknownEulerMode`] error.
    #[inline]
    pub fn unknown_euler_mode(name: impl Into<String>) -> Self {
        Self::UnknownEulerMode(name.into())
    }

    /// Returns `true` if this error comes from a numeric operation
    /// rather than from selector parsing.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SingularMatrix { .. } | Self::TotalInternalReflection { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_message() {
        let err = Error::singular(0.0);
        assert!(err.to_string().contains("singular"));
        assert!(err.is_numeric());
    }

    #[test]
    fn test_tir_message() {
        let err = Error::total_internal_reflection(1.5, -0.25);
        let msg = err.to_string();
        assert!(msg.contains("1.5"));
        assert!(msg.contains("-0.25"));
        assert!(err.is_numeric());
    }

    #[test]
    fn test_selector_errors() {
        let err = Error::InvalidAxis(7);
        assert!(err.to_string().contains('7'));
        assert!(!err.is_numeric());

        let err = Error::unknown_euler_mode("qqq");
        assert!(err.to_string().contains("qqq"));
        assert!(!err.is_numeric());
    }
}
