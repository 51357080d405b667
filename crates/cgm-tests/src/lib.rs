//! Integration tests for the cgm crates.
//!
//! [`crosscheck`] compares cgm against glam on seeded random inputs; it backs
//! the `cgm-crosscheck` binary. The tests below exercise cross-module laws
//! (composition, inversion, rotation equivalences) on random inputs.

pub mod crosscheck;

pub use crosscheck::{CrossCheckConfig, Mismatch, OpStats, Report, run};
