//! Shared numerical primitives anchored on `num-complex`.

use num_complex::Complex;

use crate::config::NumericPolicy;
use crate::constants::{angular_frequency, TANH_SATURATION};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances.
pub type CScalar = Complex<Scalar>;

/// The imaginary unit `j`.
pub const J: CScalar = Complex::new(0.0, 1.0);

/// Angular frequencies `ω = 2πf` for a frequency vector in hertz.
pub fn omegas(freqs: &[Scalar]) -> impl Iterator<Item = Scalar> + '_ {
    freqs.iter().copied().map(angular_frequency)
}

/// `sinh(z)`, replaced by the policy sentinel once `Re z` reaches the overflow threshold.
#[must_use]
pub fn guarded_sinh(z: CScalar, policy: &NumericPolicy) -> CScalar {
    if policy.overflows(z.re) {
        log::trace!("sinh argument {z} at or above threshold, using sentinel");
        Complex::new(policy.sinh_sentinel, 0.0)
    } else {
        z.sinh()
    }
}

/// `tanh(z)` that returns its `±1` limit for large `|Re z|`.
///
/// `num_complex` evaluates `tanh` as a ratio of `sinh(2x)` and `cosh(2x)`,
/// which is `inf/inf` once `|Re z|` passes ~355.
#[must_use]
pub fn saturating_tanh(z: CScalar) -> CScalar {
    if z.re.abs() > TANH_SATURATION {
        Complex::new(z.re.signum(), 0.0)
    } else {
        z.tanh()
    }
}

/// `1 / z` by Smith's scaled division.
///
/// `Complex::inv` forms `|z|²` directly, which overflows past `|z| ≈ 1e154`
/// and underflows below `1e-154`. Scaling by the larger component keeps the
/// result finite wherever `1 / z` is representable. `1 / 0` is `NaN`.
#[must_use]
pub fn reciprocal(z: CScalar) -> CScalar {
    if z.re.abs() >= z.im.abs() {
        let ratio = z.im / z.re;
        let denom = z.re + z.im * ratio;
        Complex::new(1.0 / denom, -ratio / denom)
    } else {
        let ratio = z.re / z.im;
        let denom = z.re * ratio + z.im;
        Complex::new(ratio / denom, -1.0 / denom)
    }
}

/// Principal power `z^alpha` (branch cut along the negative real axis).
#[inline]
#[must_use]
pub fn principal_pow(z: CScalar, alpha: Scalar) -> CScalar {
    z.powf(alpha)
}
