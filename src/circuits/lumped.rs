//! Lumped and relaxation elements: `R`, `C`, `L`, `CPE`, `La`, `K`, `Zarc`.
//!
//! Every formula is evaluated independently per frequency with `ω = 2πf`.
//! Fractional exponents use the principal complex power.

use num_complex::Complex;

use crate::math::{omegas, principal_pow, reciprocal, CScalar, Scalar, J};

/// Resistor, `Z = R` at every frequency.
#[must_use]
pub fn resistor(p: &[Scalar; 1], freqs: &[Scalar]) -> Vec<CScalar> {
    vec![Complex::new(p[0], 0.0); freqs.len()]
}

/// Capacitor, `Z = 1 / (jωC)`.
#[must_use]
pub fn capacitor(p: &[Scalar; 1], freqs: &[Scalar]) -> Vec<CScalar> {
    let c = p[0];
    omegas(freqs).map(|w| reciprocal(J * w * c)).collect()
}

/// Inductor, `Z = jωL`.
#[must_use]
pub fn inductor(p: &[Scalar; 1], freqs: &[Scalar]) -> Vec<CScalar> {
    let l = p[0];
    omegas(freqs).map(|w| J * w * l).collect()
}

/// Constant phase element, `Z = 1 / (Q (jω)^α)`.
#[must_use]
pub fn constant_phase(p: &[Scalar; 2], freqs: &[Scalar]) -> Vec<CScalar> {
    let [q, alpha] = *p;
    omegas(freqs)
        .map(|w| reciprocal(principal_pow(J * w, alpha) * q))
        .collect()
}

/// Modified inductance, `Z = (jωL)^α`.
#[must_use]
pub fn modified_inductance(p: &[Scalar; 2], freqs: &[Scalar]) -> Vec<CScalar> {
    let [l, alpha] = *p;
    omegas(freqs)
        .map(|w| principal_pow(J * w * l, alpha))
        .collect()
}

/// Single RC relaxation used by lin-KK, `Z = R / (1 + jωτ)`.
#[must_use]
pub fn relaxation(p: &[Scalar; 2], freqs: &[Scalar]) -> Vec<CScalar> {
    let [r, tau] = *p;
    omegas(freqs).map(|w| r / (1.0 + J * w * tau)).collect()
}

/// Cole–Cole relaxation (RQ with a time constant), `Z = R / (1 + (jωτ)^γ)`.
#[must_use]
pub fn zarc(p: &[Scalar; 3], freqs: &[Scalar]) -> Vec<CScalar> {
    let [r, tau, gamma] = *p;
    omegas(freqs)
        .map(|w| r / (1.0 + principal_pow(J * w * tau, gamma)))
        .collect()
}
