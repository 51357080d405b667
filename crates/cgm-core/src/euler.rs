//! Principal axes and Euler angle orderings.
//!
//! [`EulerMode`] selects one of the twelve ways three angles combine into a
//! rotation. A mode is read left to right: `Xyz` rotates about X by the first
//! angle, then about the (already rotated) Y by the second, then about the
//! (already rotated) Z by the third. In matrix form this is
//! `R(x, a) * R(y, b) * R(z, c)` applied to column vectors.
//!
//! # Usage
//!
//! ```rust
//! use cgm_core::{Axis, EulerMode};
//!
//! let mode: EulerMode = "zxz".parse().unwrap();
//! assert_eq!(mode, EulerMode::Zxz);
//! assert_eq!(mode.axes(), [Axis::Z, Axis::X, Axis::Z]);
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// X axis (index 0)
    X,
    /// Y axis (index 1)
    Y,
    /// Z axis (index 2)
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of this axis (0, 1 or 2).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(idx: usize) -> Result<Self, Error> {
        match idx {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis(idx)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "0" => Ok(Axis::X),
            "y" | "1" => Ok(Axis::Y),
            "z" | "2" => Ok(Axis::Z),
            other => match other.parse::<usize>() {
                Ok(idx) => Err(Error::InvalidAxis(idx)),
                Err(_) => Err(Error::InvalidAxis(usize::MAX)),
            },
        }
    }
}

/// Euler angle ordering.
///
/// The first six are Tait-Bryan orderings (three distinct axes), the last six
/// are proper Euler orderings (first and last axis repeat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EulerMode {
    /// X, then Y, then Z
    #[default]
    Xyz,
    /// X, then Z, then Y
    Xzy,
    /// Y, then X, then Z
    Yxz,
    /// Y, then Z, then X
    Yzx,
    /// Z, then X, then Y
    Zxy,
    /// Z, then Y, then X
    Zyx,
    /// Z, then X, then Z
    Zxz,
    /// Z, then Y, then Z
    Zyz,
    /// Y, then X, then Y
    Yxy,
    /// Y, then Z, then Y
    Yzy,
    /// X, then Y, then X
    Xyx,
    /// X, then Z, then X
    Xzx,
}

impl EulerMode {
    /// All twelve orderings.
    pub const ALL: [EulerMode; 12] = [
        EulerMode::Xyz,
        EulerMode::Xzy,
        EulerMode::Yxz,
        EulerMode::Yzx,
        EulerMode::Zxy,
        EulerMode::Zyx,
        EulerMode::Zxz,
        EulerMode::Zyz,
        EulerMode::Yxy,
        EulerMode::Yzy,
        EulerMode::Xyx,
        EulerMode::Xzx,
    ];

    /// The three axes in application order.
    #[inline]
    pub const fn axes(self) -> [Axis; 3] {
        use Axis::*;
        match self {
            EulerMode::Xyz => [X, Y, Z],
            EulerMode::Xzy => [X, Z, Y],
            EulerMode::Yxz => [Y, X, Z],
            EulerMode::Yzx => [Y, Z, X],
            EulerMode::Zxy => [Z, X, Y],
            EulerMode::Zyx => [Z, Y, X],
            EulerMode::Zxz => [Z, X, Z],
            EulerMode::Zyz => [Z, Y, Z],
            EulerMode::Yxy => [Y, X, Y],
            EulerMode::Yzy => [Y, Z, Y],
            EulerMode::Xyx => [X, Y, X],
            EulerMode::Xzx => [X, Z, X],
        }
    }

    /// Returns `true` for proper Euler orderings (first axis == last axis).
    #[inline]
    pub fn is_proper(self) -> bool {
        let [a, _, c] = self.axes();
        a == c
    }

    /// Lowercase name, e.g. `"xyz"`.
    pub const fn name(self) -> &'static str {
        match self {
            EulerMode::Xyz => "xyz",
            EulerMode::Xzy => "xzy",
            EulerMode::Yxz => "yxz",
            EulerMode::Yzx => "yzx",
            EulerMode::Zxy => "zxy",
            EulerMode::Zyx => "zyx",
            EulerMode::Zxz => "zxz",
            EulerMode::Zyz => "zyz",
            EulerMode::Yxy => "yxy",
            EulerMode::Yzy => "yzy",
            EulerMode::Xyx => "xyx",
            EulerMode::Xzx => "xzx",
        }
    }
}

impl fmt::Display for EulerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.trim().to_ascii_lowercase();
        EulerMode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| Error::unknown_euler_mode(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::try_from(0).unwrap(), Axis::X);
        assert_eq!(Axis::try_from(2).unwrap(), Axis::Z);
        assert_eq!(Axis::try_from(3), Err(Error::InvalidAxis(3)));
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("2".parse::<Axis>().unwrap(), Axis::Z);
        assert_eq!("5".parse::<Axis>(), Err(Error::InvalidAxis(5)));
        assert!("w".parse::<Axis>().is_err());
    }

    #[test]
    fn test_euler_parse_roundtrip() {
        for mode in EulerMode::ALL {
            assert_eq!(mode.to_string().parse::<EulerMode>().unwrap(), mode);
        }
        assert_eq!("ZYX".parse::<EulerMode>().unwrap(), EulerMode::Zyx);
        assert!("xxy".parse::<EulerMode>().is_err());
    }

    #[test]
    fn test_euler_axes() {
        assert_eq!(EulerMode::Yzx.axes(), [Axis::Y, Axis::Z, Axis::X]);
        assert_eq!(EulerMode::Xzx.axes(), [Axis::X, Axis::Z, Axis::X]);
        let proper = EulerMode::ALL.iter().filter(|m| m.is_proper()).count();
        assert_eq!(proper, 6);
    }
}
