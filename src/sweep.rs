//! Frequency vectors for element evaluation and Bode-plot helpers for the results.

use crate::math::{CScalar, Scalar};

/// `n` linearly spaced frequencies in `[start, stop]` (Hz).
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// `n` logarithmically spaced frequencies between `start_hz` and `stop_hz`.
///
/// Impedance spectra are conventionally recorded from high to low frequency,
/// so `start_hz > stop_hz` is allowed and produces a descending sweep.
///
/// # Panics
///
/// Panics unless both bounds are strictly positive.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0, "frequency bounds must be positive");
    linspace(start_hz.log10(), stop_hz.log10(), n)
        .into_iter()
        .map(|exponent| 10f64.powf(exponent))
        .collect()
}

/// Logarithmic sweep with `per_decade` points per decade, both bounds included.
#[must_use]
pub fn decades(start_hz: Scalar, stop_hz: Scalar, per_decade: usize) -> Vec<Scalar> {
    let span = (stop_hz.log10() - start_hz.log10()).abs();
    let n = (span * per_decade as Scalar).round() as usize + 1;
    logspace_hz(start_hz, stop_hz, n)
}

/// `|Z|` for each impedance.
#[must_use]
pub fn magnitude(values: &[CScalar]) -> Vec<Scalar> {
    values.iter().map(|z| z.norm()).collect()
}

/// Phase of each impedance in degrees.
#[must_use]
pub fn phase_deg(values: &[CScalar]) -> Vec<Scalar> {
    values.iter().map(|z| z.arg().to_degrees()).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_complex::Complex;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn logspace_hits_decades() {
        let v = logspace_hz(1.0e5, 1.0e-1, 7);
        assert_eq!(v.len(), 7);
        for (got, want) in v.iter().zip([1.0e5, 1.0e4, 1.0e3, 1.0e2, 1.0e1, 1.0, 1.0e-1]) {
            assert_relative_eq!(*got, want, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn decades_counts_points() {
        assert_eq!(decades(1.0e-2, 1.0e5, 10).len(), 71);
    }

    #[test]
    fn magnitude_and_phase() {
        let z = [Complex::new(3.0, 4.0), Complex::new(0.0, -2.0)];
        assert_eq!(magnitude(&z), vec![5.0, 2.0]);
        let phase = phase_deg(&z);
        assert_relative_eq!(phase[0], 53.130_102_354_155_98, max_relative = 1.0e-12);
        assert_relative_eq!(phase[1], -90.0, max_relative = 1.0e-12);
    }
}
