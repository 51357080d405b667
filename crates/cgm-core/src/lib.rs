//! # cgm-core
//!
//! Core types shared by the cgm crates.
//!
//! - [`Error`], [`Result`] - Failure values of the math operations
//! - [`Axis`] - Principal axis selector
//! - [`EulerMode`] - The twelve Euler angle orderings
//!
//! ## Crate Structure
//!
//! ```text
//! cgm-core (this crate)
//!    ^
//!    |
//!    +-- cgm-math (vectors, quaternions, matrices)
//!    +-- cgm-cli (command line front end)
//!    +-- cgm-tests (cross-check harness)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Axis`] and [`EulerMode`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod euler;

pub use error::*;
pub use euler::*;

/// Prelude module for convenient imports.
///
/// ```
/// use cgm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::euler::{Axis, EulerMode};
}
