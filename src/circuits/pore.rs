//! Closed-form recovery of the Paasch pore parameters.
//!
//! Solves
//!
//! ```text
//! (R1² + R2²) / (R1 + R2) = A
//! 2·R1·R2 / (R1 + R2)     = B
//! (R1 + R2) / Rct         = a
//! Cdl · (R1 + R2)         = b
//! ```
//!
//! With `S = R1 + R2` the first two equations give `S = A + B` and
//! `R1·R2 = B·S/2`, so `R1` and `R2` are the roots of `x² − S·x + B·S/2`:
//! `(S ∓ √(A² − B²)) / 2`. The two branches differ only in which root is `R1`.

use thiserror::Error;

use crate::math::Scalar;

/// Failure modes of the pore-parameter solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoreSolveError {
    /// An aggregate parameter is infinite.
    #[error("pore parameters must be finite (A={big_a}, B={big_b}, a={a}, b={b})")]
    NonFinite {
        /// Aggregate `A`.
        big_a: Scalar,
        /// Aggregate `B`.
        big_b: Scalar,
        /// Aggregate `a`.
        a: Scalar,
        /// Aggregate `b`.
        b: Scalar,
    },
    /// `A² < B²`: the resistances would be complex.
    #[error("no real pore resistances for A={big_a}, B={big_b} (requires |A| >= |B|)")]
    NoRealSolution {
        /// Aggregate `A`.
        big_a: Scalar,
        /// Aggregate `B`.
        big_b: Scalar,
    },
    /// `A + B = 0` leaves `R1 + R2 = 0` in every denominator.
    #[error("A + B must be non-zero")]
    ZeroResistanceSum,
    /// `a = 0` has no finite charge-transfer resistance.
    #[error("a must be non-zero to recover Rct")]
    ZeroRatio,
}

/// Which root of the quadratic is reported as `R1`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Branch {
    /// Solution index 0: `R1 ≤ R2`.
    #[default]
    Primary,
    /// Solution index 1: `R1 ≥ R2`.
    Secondary,
}

impl Branch {
    /// Branch for a solution index (`0` or `1`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Solution index of this branch.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

/// Physical sub-parameters of the porous electrode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoreParameters {
    /// First phase resistance.
    pub r1: Scalar,
    /// Second phase resistance.
    pub r2: Scalar,
    /// Charge-transfer resistance.
    pub rct: Scalar,
    /// Double-layer capacitance.
    pub cdl: Scalar,
}

impl PoreParameters {
    /// Residuals of the four defining equations for aggregates `(A, B, a, b)`.
    #[must_use]
    pub fn residuals(&self, big_a: Scalar, big_b: Scalar, a: Scalar, b: Scalar) -> [Scalar; 4] {
        let sum = self.r1 + self.r2;
        [
            (self.r1 * self.r1 + self.r2 * self.r2) / sum - big_a,
            2.0 * self.r1 * self.r2 / sum - big_b,
            sum / self.rct - a,
            self.cdl * sum - b,
        ]
    }
}

/// Solves for `(R1, R2, Rct, Cdl)` on the requested branch.
pub fn pore_parameters(
    big_a: Scalar,
    big_b: Scalar,
    a: Scalar,
    b: Scalar,
    branch: Branch,
) -> Result<PoreParameters, PoreSolveError> {
    if ![big_a, big_b, a, b].iter().all(|v| v.is_finite()) {
        return Err(PoreSolveError::NonFinite { big_a, big_b, a, b });
    }
    let sum = big_a + big_b;
    if sum == 0.0 {
        return Err(PoreSolveError::ZeroResistanceSum);
    }
    if a == 0.0 {
        return Err(PoreSolveError::ZeroRatio);
    }
    // (A − B)(A + B) keeps precision when |A| ≈ |B|.
    let discriminant = (big_a - big_b) * sum;
    if discriminant < 0.0 {
        return Err(PoreSolveError::NoRealSolution { big_a, big_b });
    }
    let root = discriminant.sqrt();
    let (low, high) = ((sum - root) / 2.0, (sum + root) / 2.0);
    let (r1, r2) = match branch {
        Branch::Primary => (low, high),
        Branch::Secondary => (high, low),
    };
    Ok(PoreParameters {
        r1,
        r2,
        rct: sum / a,
        cdl: b / sum,
    })
}

/// Solution index 0.
pub fn pore_parameters_primary(
    big_a: Scalar,
    big_b: Scalar,
    a: Scalar,
    b: Scalar,
) -> Result<PoreParameters, PoreSolveError> {
    pore_parameters(big_a, big_b, a, b, Branch::Primary)
}

/// Solution index 1.
pub fn pore_parameters_secondary(
    big_a: Scalar,
    big_b: Scalar,
    a: Scalar,
    b: Scalar,
) -> Result<PoreParameters, PoreSolveError> {
    pore_parameters(big_a, big_b, a, b, Branch::Secondary)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn assert_satisfies(params: &PoreParameters, aggregates: [Scalar; 4]) {
        let [big_a, big_b, a, b] = aggregates;
        let residuals = params.residuals(big_a, big_b, a, b);
        for (residual, target) in residuals.iter().zip(aggregates) {
            assert!(
                residual.abs() <= 1.0e-10 * target.abs().max(1.0),
                "residual {residual} for target {target} ({params:?})"
            );
        }
    }

    #[test]
    fn both_branches_satisfy_defining_equations() {
        for aggregates in [
            [10.0, 4.0, 2.0, 0.5],
            [1.0e3, 999.0, 1.0e-2, 3.0e-4],
            [2.5, 0.0, 7.0, 1.0],
            [0.02, 0.015, 150.0, 1.0e-6],
        ] {
            let [big_a, big_b, a, b] = aggregates;
            for branch in [Branch::Primary, Branch::Secondary] {
                let params = pore_parameters(big_a, big_b, a, b, branch).unwrap();
                assert_satisfies(&params, aggregates);
            }
        }
    }

    #[test]
    fn branches_swap_resistances() {
        let first = pore_parameters_primary(10.0, 6.0, 2.0, 0.5).unwrap();
        let second = pore_parameters_secondary(10.0, 6.0, 2.0, 0.5).unwrap();
        assert_relative_eq!(first.r1, second.r2);
        assert_relative_eq!(first.r2, second.r1);
        assert!(first.r1 <= first.r2);
        assert_eq!(first.rct, second.rct);
        assert_eq!(first.cdl, second.cdl);
    }

    #[test]
    fn known_solution() {
        // S = 16, sqrt(100 − 36) = 8
        let params = pore_parameters_primary(10.0, 6.0, 2.0, 0.5).unwrap();
        assert_relative_eq!(params.r1, 4.0);
        assert_relative_eq!(params.r2, 12.0);
        assert_relative_eq!(params.rct, 8.0);
        assert_relative_eq!(params.cdl, 0.5 / 16.0);
    }

    #[test]
    fn complex_resistances_are_rejected() {
        let err = pore_parameters_primary(1.0, 2.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, PoreSolveError::NoRealSolution { big_a: 1.0, big_b: 2.0 });
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert_eq!(
            pore_parameters_primary(1.0, -1.0, 1.0, 1.0).unwrap_err(),
            PoreSolveError::ZeroResistanceSum
        );
        assert_eq!(
            pore_parameters_primary(1.0, 0.5, 0.0, 1.0).unwrap_err(),
            PoreSolveError::ZeroRatio
        );
        assert!(matches!(
            pore_parameters_primary(Scalar::INFINITY, 0.5, 1.0, 1.0),
            Err(PoreSolveError::NonFinite { .. })
        ));
    }

    #[test]
    fn branch_indices() {
        assert_eq!(Branch::from_index(0), Some(Branch::Primary));
        assert_eq!(Branch::from_index(1).map(Branch::index), Some(1));
        assert_eq!(Branch::from_index(2), None);
    }
}
