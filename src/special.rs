//! Modified Bessel functions of the first kind for complex arguments.
//!
//! Only orders 0 and 1 are needed (cylindrical diffusion in `TDC`). Small
//! arguments use the ascending power series. Large arguments use the Hankel
//! expansion with both the growing `e^z` and the decaying `e^{-z}` series, so
//! it holds on the whole closed right half-plane, imaginary axis included.
//! The left half-plane follows from `I_n(-z) = (-1)^n I_n(z)`.

use num_complex::Complex;

use crate::math::{CScalar, Scalar, J};

/// Modulus above which the asymptotic expansion replaces the power series.
///
/// Past this the smallest Hankel term is below `f64` resolution, while the
/// power series on the imaginary axis starts losing digits to cancellation.
const ASYMPTOTIC_MODULUS: Scalar = 17.0;
const MAX_TERMS: usize = 500;

/// `I0(z)`.
#[must_use]
pub fn bessel_i0(z: CScalar) -> CScalar {
    bessel_i(0, z)
}

/// `I1(z)`.
#[must_use]
pub fn bessel_i1(z: CScalar) -> CScalar {
    bessel_i(1, z)
}

fn bessel_i(order: u32, z: CScalar) -> CScalar {
    // I_n(-z) = (-1)^n I_n(z)
    if z.re < 0.0 {
        let value = bessel_i(order, -z);
        return if order % 2 == 0 { value } else { -value };
    }
    if z.norm() > ASYMPTOTIC_MODULUS {
        asymptotic(order, z)
    } else {
        power_series(order, z)
    }
}

fn power_series(order: u32, z: CScalar) -> CScalar {
    let half = z * 0.5;
    let quarter_sq = half * half;

    // (z/2)^n / n!
    let mut term = Complex::new(1.0, 0.0);
    for k in 1..=order {
        term = term * half / Scalar::from(k);
    }

    let mut sum = term;
    for k in 1..MAX_TERMS {
        let k = k as Scalar;
        term = term * quarter_sq / (k * (k + Scalar::from(order)));
        sum += term;
        if term.norm() <= Scalar::EPSILON * 0.5 * sum.norm() {
            break;
        }
    }
    sum
}

/// `Σ (-1)^k a_k(n) / w^k`, truncated at its smallest term.
fn hankel_sum(order: u32, w: CScalar) -> CScalar {
    let mu = 4.0 * Scalar::from(order * order);
    let mut term = Complex::new(1.0, 0.0);
    let mut sum = term;
    let mut previous = Scalar::INFINITY;
    for k in 1..MAX_TERMS {
        let odd = (2 * k - 1) as Scalar;
        term = term * (-(mu - odd * odd)) / (w * (8.0 * k as Scalar));
        let size = term.norm();
        // Divergent tail: stop at the smallest term.
        if size >= previous {
            break;
        }
        sum += term;
        if size <= Scalar::EPSILON * 0.5 * sum.norm() {
            break;
        }
        previous = size;
    }
    sum
}

/// Hankel expansion for `Re z >= 0`, `|z|` large.
///
/// `I_n(z) ~ [e^z S(z) ± j (-1)^n e^{-z} S(-z)] / √(2πz)` with the upper sign
/// for `Im z >= 0`. The `e^{-z}` part is what keeps the imaginary axis accurate.
fn asymptotic(order: u32, z: CScalar) -> CScalar {
    let growing = z.exp() * hankel_sum(order, z);
    let mut rotation = if z.im >= 0.0 { J } else { -J };
    if order % 2 == 1 {
        rotation = -rotation;
    }
    let decaying = rotation * (-z).exp() * hankel_sum(order, -z);
    (growing + decaying) / (z * (2.0 * std::f64::consts::PI)).sqrt()
}
