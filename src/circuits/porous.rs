//! Macrohomogeneous porous-electrode elements after Paasch, Micka and Gersdorf.
//!
//! All of them share the response
//!
//! ```text
//! Z = A / (β tanh β) + B / (β sinh β)
//! ```
//!
//! and differ in how `β` is built. `T` uses `β = √(a + jωb)` directly. The
//! diffusion variants split the aggregates into pore resistance `Rpore`,
//! charge-transfer resistance `Rct` and double-layer capacitance `Cdl`, add a
//! diffusion impedance `Zd` in series with `Rct`, and use
//! `β = √(jω Rpore Cdl + Rpore / (Zd + Rct))`.
//!
//! `sinh β` and the Bessel terms of `TDC` are guarded by [`NumericPolicy`].

use num_complex::Complex;

use crate::circuits::pore::{pore_parameters, Branch};
use crate::config::NumericPolicy;
use crate::errors::Result;
use crate::math::{guarded_sinh, omegas, saturating_tanh, CScalar, Scalar, J};
use crate::special::{bessel_i0, bessel_i1};

/// Interface parameters driving `β` in the diffusion variants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interface {
    /// Pore (electrolyte) resistance.
    pub rpore: Scalar,
    /// Charge-transfer resistance.
    pub rct: Scalar,
    /// Double-layer capacitance.
    pub cdl: Scalar,
}

impl Interface {
    /// Direct split used by the planar and cylindrical variants:
    /// `Rpore = A`, `Rct = (A + B)/a`, `Cdl = b/(A + B)`.
    #[must_use]
    pub fn from_aggregates(big_a: Scalar, big_b: Scalar, a: Scalar, b: Scalar) -> Self {
        let sum = big_a + big_b;
        Self {
            rpore: big_a,
            rct: sum / a,
            cdl: b / sum,
        }
    }

    /// Split via the pore-parameter solve; `Rpore` is `R2` of the chosen branch.
    pub fn solved(big_a: Scalar, big_b: Scalar, a: Scalar, b: Scalar, branch: Branch) -> Result<Self> {
        let pore = pore_parameters(big_a, big_b, a, b, branch)?;
        Ok(Self {
            rpore: pore.r2,
            rct: pore.rct,
            cdl: pore.cdl,
        })
    }

    fn beta(&self, omega: Scalar, zd: CScalar) -> CScalar {
        (J * omega * self.rpore * self.cdl + self.rpore / (zd + self.rct)).sqrt()
    }
}

fn paasch_response(big_a: Scalar, big_b: Scalar, beta: CScalar, policy: &NumericPolicy) -> CScalar {
    big_a / (beta * saturating_tanh(beta)) + big_b / (beta * guarded_sinh(beta, policy))
}

/// Porous electrode without a diffusion term, `β = √(a + jωb)`.
#[must_use]
pub fn paasch(p: &[Scalar; 4], freqs: &[Scalar], policy: &NumericPolicy) -> Vec<CScalar> {
    let [big_a, big_b, a, b] = *p;
    omegas(freqs)
        .map(|w| {
            let beta = (a + J * w * b).sqrt();
            paasch_response(big_a, big_b, beta, policy)
        })
        .collect()
}

/// Porous electrode with planar diffusion, `Zd = A_w coth(√(jωτ_D)) / √(jωτ_D)`.
#[must_use]
pub fn paasch_planar(p: &[Scalar; 6], freqs: &[Scalar], policy: &NumericPolicy) -> Vec<CScalar> {
    let [big_a, big_b, a, b, aw, tau_d] = *p;
    let interface = Interface::from_aggregates(big_a, big_b, a, b);
    omegas(freqs)
        .map(|w| {
            let x = (J * w * tau_d).sqrt();
            let zd = aw / (saturating_tanh(x) * x);
            paasch_response(big_a, big_b, interface.beta(w, zd), policy)
        })
        .collect()
}

/// Porous electrode with cylindrical diffusion, `Zd = A_w I0(x) / (x I1(x))`, `x = √(jωτ_D)`.
#[must_use]
pub fn paasch_cylindrical(p: &[Scalar; 6], freqs: &[Scalar], policy: &NumericPolicy) -> Vec<CScalar> {
    let [big_a, big_b, a, b, aw, tau_d] = *p;
    let interface = Interface::from_aggregates(big_a, big_b, a, b);
    omegas(freqs)
        .map(|w| {
            let x = (J * w * tau_d).sqrt();
            let (i0, i1) = if policy.overflows(x.re) {
                log::trace!("bessel argument {x} at or above threshold, using sentinel");
                let sentinel = Complex::new(policy.bessel_sentinel, 0.0);
                (sentinel, sentinel)
            } else {
                (bessel_i0(x), bessel_i1(x))
            };
            let zd = i0 * aw / (x * i1);
            paasch_response(big_a, big_b, interface.beta(w, zd), policy)
        })
        .collect()
}

/// Porous electrode with spherical diffusion, `Zd = A_w tanh(x) / (x − tanh x)`.
///
/// `Rpore`, `Rct` and `Cdl` come from the pore-parameter solve on `branch`;
/// fails when that solve has no real solution.
pub fn paasch_spherical(
    p: &[Scalar; 6],
    freqs: &[Scalar],
    branch: Branch,
    policy: &NumericPolicy,
) -> Result<Vec<CScalar>> {
    let [big_a, big_b, a, b, aw, tau_d] = *p;
    let interface = Interface::solved(big_a, big_b, a, b, branch)?;
    Ok(omegas(freqs)
        .map(|w| {
            let x = (J * w * tau_d).sqrt();
            let t = saturating_tanh(x);
            let zd = t * aw / (x - t);
            paasch_response(big_a, big_b, interface.beta(w, zd), policy)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::EisError;

    fn freqs() -> Vec<Scalar> {
        (-3..=5).map(|k| 10f64.powi(k)).collect()
    }

    fn assert_close(a: &[CScalar], b: &[CScalar], tol: Scalar) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).norm() <= tol * y.norm(), "{x} vs {y}");
        }
    }

    #[test]
    fn paasch_without_b_is_transmission_line() {
        // B = 0 reduces to A / (β tanh β)
        let policy = NumericPolicy::default();
        let z = paasch(&[10.0, 0.0, 2.0, 1.0e-3], &[1.0], &policy)[0];
        let beta = (2.0 + J * crate::constants::angular_frequency(1.0) * 1.0e-3).sqrt();
        let expected = 10.0 / (beta * beta.tanh());
        assert_relative_eq!(z.re, expected.re, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, expected.im, max_relative = 1.0e-12);
    }

    #[test]
    fn paasch_is_finite_past_sinh_threshold() {
        let policy = NumericPolicy::default();
        // |β| ≈ √(ωb) reaches several hundred at the top frequency
        let z = paasch(&[10.0, 4.0, 1.0, 1.0], &[1.0e6], &policy);
        assert!(z[0].is_finite());
    }

    #[test]
    fn diffusion_variants_reduce_to_paasch_without_diffusion() {
        let policy = NumericPolicy::default();
        let (big_a, a, b) = (12.0, 3.0, 2.0e-3);
        let reference = paasch(&[big_a, 0.0, a, b], &freqs(), &policy);
        let p = [big_a, 0.0, a, b, 0.0, 1.5];
        assert_close(&paasch_planar(&p, &freqs(), &policy), &reference, 1.0e-12);
        assert_close(&paasch_cylindrical(&p, &freqs(), &policy), &reference, 1.0e-12);
        let spherical = paasch_spherical(&p, &freqs(), Branch::Primary, &policy).unwrap();
        assert_close(&spherical, &reference, 1.0e-12);
    }

    #[test]
    fn diffusion_raises_low_frequency_impedance() {
        let policy = NumericPolicy::default();
        let without = paasch_planar(&[12.0, 0.0, 3.0, 2.0e-3, 0.0, 1.5], &[1.0e-3], &policy)[0];
        let with = paasch_planar(&[12.0, 0.0, 3.0, 2.0e-3, 50.0, 1.5], &[1.0e-3], &policy)[0];
        assert!(with.re > without.re);
    }

    #[test]
    fn cylindrical_uses_sentinel_for_large_arguments() {
        let policy = NumericPolicy::default();
        // √(ωτ) ≈ 2500, far past the Bessel threshold
        let z = paasch_cylindrical(&[12.0, 2.0, 3.0, 2.0e-3, 5.0, 1.0], &[1.0e6], &policy);
        assert!(z[0].is_finite());
    }

    #[test]
    fn cylindrical_matches_planar_at_high_frequency() {
        // I0/I1 → 1 and coth → 1 as |x| grows, so both diffusion terms tend to A_w / x.
        let policy = NumericPolicy::default();
        let p = [12.0, 2.0, 3.0, 2.0e-3, 5.0, 1.0];
        let f = [2.0e2];
        let planar = paasch_planar(&p, &f, &policy);
        let cylindrical = paasch_cylindrical(&p, &f, &policy);
        assert_close(&cylindrical, &planar, 1.0e-2);
    }

    #[test]
    fn spherical_branches_differ_when_b_is_nonzero() {
        let policy = NumericPolicy::default();
        let p = [10.0, 6.0, 2.0, 1.0e-3, 5.0, 1.0];
        let first = paasch_spherical(&p, &[10.0], Branch::Primary, &policy).unwrap();
        let second = paasch_spherical(&p, &[10.0], Branch::Secondary, &policy).unwrap();
        assert!((first[0] - second[0]).norm() > 1.0e-6);
    }

    #[test]
    fn spherical_propagates_solver_failure() {
        let policy = NumericPolicy::default();
        let err = paasch_spherical(&[1.0, 2.0, 1.0, 1.0, 1.0, 1.0], &[1.0], Branch::Primary, &policy)
            .unwrap_err();
        assert!(matches!(err, EisError::Solver(_)));
    }
}
