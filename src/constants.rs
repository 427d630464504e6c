//! Numeric constants shared by the element formulas.
//!
//! ## Overflow guards
//!
//! `sinh(x)` overflows `f64` once `Re x` exceeds roughly 710, and the modified
//! Bessel functions `I0`/`I1` grow like `e^x / sqrt(2πx)`. The porous-electrode
//! elements divide by these terms, so once the real part of the argument
//! reaches [`OVERFLOW_THRESHOLD`] the term is replaced by a large finite
//! sentinel and the quotient collapses to (nearly) zero instead of `0/inf`
//! or `inf/inf`.

use std::f64::consts::PI;

/// Real-part magnitude at which hyperbolic and Bessel terms are replaced by sentinels.
pub const OVERFLOW_THRESHOLD: f64 = 100.0;
/// Stand-in value for `sinh(β)` once `Re β ≥ OVERFLOW_THRESHOLD`.
pub const SINH_SENTINEL: f64 = 1.0e10;
/// Stand-in value for `I0(x)` and `I1(x)` once `Re x ≥ OVERFLOW_THRESHOLD`.
pub const BESSEL_SENTINEL: f64 = 1.0e20;
/// Real-part magnitude beyond which `tanh` is exactly `±1` in `f64`.
///
/// `1 - tanh(20)` is about `8.5e-18`, below half an ulp of 1.0.
pub const TANH_SATURATION: f64 = 20.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}
