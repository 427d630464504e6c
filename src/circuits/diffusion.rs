//! Diffusion and distributed elements: Warburg variants, Gerischer variants, `TLMQ`.

use num_complex::Complex;

use crate::math::{omegas, principal_pow, reciprocal, saturating_tanh, CScalar, Scalar, J};

/// Semi-infinite Warburg, `Z = A_W (1 − j) / √ω`.
#[must_use]
pub fn warburg(p: &[Scalar; 1], freqs: &[Scalar]) -> Vec<CScalar> {
    let aw = p[0];
    let slope = Complex::new(aw, -aw);
    omegas(freqs).map(|w| slope / w.sqrt()).collect()
}

/// Open (finite-space) Warburg, `Z = Z0 coth(√(jωτ)) / √(jωτ)`.
#[must_use]
pub fn warburg_open(p: &[Scalar; 2], freqs: &[Scalar]) -> Vec<CScalar> {
    let [z0, tau] = *p;
    omegas(freqs)
        .map(|w| {
            let x = (J * w * tau).sqrt();
            z0 / (x * saturating_tanh(x))
        })
        .collect()
}

/// Short (finite-length) Warburg, `Z = Z0 tanh(√(jωτ)) / √(jωτ)`.
#[must_use]
pub fn warburg_short(p: &[Scalar; 2], freqs: &[Scalar]) -> Vec<CScalar> {
    let [z0, tau] = *p;
    omegas(freqs)
        .map(|w| {
            let x = (J * w * tau).sqrt();
            saturating_tanh(x) * z0 / x
        })
        .collect()
}

/// Gerischer, `Z = R_G / √(1 + jω t_G)`.
#[must_use]
pub fn gerischer(p: &[Scalar; 2], freqs: &[Scalar]) -> Vec<CScalar> {
    let [rg, tg] = *p;
    omegas(freqs)
        .map(|w| rg / (1.0 + J * w * tg).sqrt())
        .collect()
}

/// Finite-length Gerischer, `Z = R_G / (√(1 + jω t_G) · tanh(φ √(1 + jω t_G)))`.
#[must_use]
pub fn gerischer_finite(p: &[Scalar; 3], freqs: &[Scalar]) -> Vec<CScalar> {
    let [rg, tg, phi] = *p;
    omegas(freqs)
        .map(|w| {
            let root = (1.0 + J * w * tg).sqrt();
            rg / (root * saturating_tanh(root * phi))
        })
        .collect()
}

/// Simplified transmission line with a CPE interface.
///
/// `Zs = 1 / (Q (jω)^γ)`, `Z = √(R_ion Zs) coth(√(R_ion / Zs))`.
#[must_use]
pub fn transmission_line_cpe(p: &[Scalar; 3], freqs: &[Scalar]) -> Vec<CScalar> {
    let [rion, q, gamma] = *p;
    omegas(freqs)
        .map(|w| {
            let zs = reciprocal(principal_pow(J * w, gamma) * q);
            (zs * rion).sqrt() / saturating_tanh((reciprocal(zs) * rion).sqrt())
        })
        .collect()
}
