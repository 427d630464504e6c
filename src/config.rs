//! Numeric policy applied by the guarded element formulas.

use crate::constants::{BESSEL_SENTINEL, OVERFLOW_THRESHOLD, SINH_SENTINEL};
use crate::math::Scalar;

/// Overflow handling for the porous-electrode elements (`T`, `TDP`, `TDC`, `TDS`, `TDSS`).
///
/// A registry captures one policy at construction time; every built-in element
/// that needs it closes over a copy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericPolicy {
    /// Real-part value at or above which a guarded term is replaced by its sentinel.
    pub overflow_threshold: Scalar,
    /// Replacement for `sinh(β)`.
    pub sinh_sentinel: Scalar,
    /// Replacement for each of `I0(x)` and `I1(x)`.
    pub bessel_sentinel: Scalar,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self {
            overflow_threshold: OVERFLOW_THRESHOLD,
            sinh_sentinel: SINH_SENTINEL,
            bessel_sentinel: BESSEL_SENTINEL,
        }
    }
}

impl NumericPolicy {
    /// Policy with a different overflow threshold.
    #[must_use]
    pub fn with_overflow_threshold(mut self, threshold: Scalar) -> Self {
        self.overflow_threshold = threshold;
        self
    }

    /// Policy with a different `sinh` sentinel.
    #[must_use]
    pub fn with_sinh_sentinel(mut self, sentinel: Scalar) -> Self {
        self.sinh_sentinel = sentinel;
        self
    }

    /// Policy with a different Bessel sentinel.
    #[must_use]
    pub fn with_bessel_sentinel(mut self, sentinel: Scalar) -> Self {
        self.bessel_sentinel = sentinel;
        self
    }

    /// True when a term with real argument part `re` must be replaced by its sentinel.
    #[inline]
    #[must_use]
    pub fn overflows(&self, re: Scalar) -> bool {
        re >= self.overflow_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_constants() {
        let policy = NumericPolicy::default();
        assert_eq!(policy.overflow_threshold, 100.0);
        assert_eq!(policy.sinh_sentinel, 1.0e10);
        assert_eq!(policy.bessel_sentinel, 1.0e20);
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = NumericPolicy::default().with_overflow_threshold(10.0);
        assert!(!policy.overflows(9.999));
        assert!(policy.overflows(10.0));
    }
}
