#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Numeric constants and overflow guards.
pub mod constants;
/// Numeric policy applied by the guarded element formulas.
pub mod config;
/// Shared complex-arithmetic helpers.
pub mod math;
/// Modified Bessel functions for complex arguments.
pub mod special;
/// Impedance elements, combinators, and the element registry.
pub mod circuits;
/// Frequency vector builders and Bode helpers.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
