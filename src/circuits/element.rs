//! Element descriptors and the shared input validator.

use std::fmt;
use std::sync::Arc;

use crate::errors::{EisError, InputVector, Result, ValidationError};
use crate::math::{CScalar, Scalar};

/// Raw transfer function `(parameters, frequencies) -> impedances`.
///
/// Called only after the validator has accepted the inputs.
pub type TransferFn = Arc<dyn Fn(&[Scalar], &[Scalar]) -> Result<Vec<CScalar>> + Send + Sync>;

/// Checks a call's inputs against an element's contract.
///
/// Rejects (never repairs) a parameter vector whose length differs from
/// `arity`, and any `NaN` entry in either vector. The frequency vector length
/// is unconstrained.
pub fn validate(params: &[Scalar], freqs: &[Scalar], name: &str, arity: usize) -> Result<()> {
    check_numbers(params, InputVector::Parameters, name)?;
    check_numbers(freqs, InputVector::Frequencies, name)?;
    if params.len() != arity {
        return Err(ValidationError::Arity {
            element: name.to_owned(),
            expected: arity,
            actual: params.len(),
            values: params.to_vec(),
        }
        .into());
    }
    Ok(())
}

fn check_numbers(values: &[Scalar], vector: InputVector, name: &str) -> Result<()> {
    match values.iter().position(|v| v.is_nan()) {
        Some(index) => Err(ValidationError::NotANumber {
            element: name.to_owned(),
            vector,
            index,
            value: values[index],
            values: values.to_vec(),
        }
        .into()),
        None => Ok(()),
    }
}

/// A named, arity-checked, unit-annotated impedance element.
#[derive(Clone)]
pub struct Element {
    name: String,
    arity: usize,
    units: Vec<String>,
    transfer: TransferFn,
}

impl Element {
    /// Creates an element from a slice-based transfer function.
    ///
    /// Fails with [`EisError::ElementDefinition`] when `units` does not hold
    /// exactly `arity` entries.
    pub fn new<U, S, F>(name: impl Into<String>, arity: usize, units: U, transfer: F) -> Result<Self>
    where
        U: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&[Scalar], &[Scalar]) -> Result<Vec<CScalar>> + Send + Sync + 'static,
    {
        let name = name.into();
        let units: Vec<String> = units.into_iter().map(Into::into).collect();
        if units.len() != arity {
            return Err(EisError::ElementDefinition(format!(
                "element {name} declares {arity} parameters but {} units",
                units.len()
            )));
        }
        Ok(Self {
            name,
            arity,
            units,
            transfer: Arc::new(transfer),
        })
    }

    /// Creates an element whose formula takes a fixed-size parameter array.
    ///
    /// Arity is `N`, so the units/arity invariant holds by construction.
    #[must_use]
    pub fn fixed<const N: usize, F>(name: impl Into<String>, units: [&str; N], formula: F) -> Self
    where
        F: Fn(&[Scalar; N], &[Scalar]) -> Vec<CScalar> + Send + Sync + 'static,
    {
        Self::try_fixed(name, units, move |p, f| Ok(formula(p, f)))
    }

    /// Like [`Element::fixed`] for formulas that can fail (e.g. the pore-parameter solve).
    #[must_use]
    pub fn try_fixed<const N: usize, F>(name: impl Into<String>, units: [&str; N], formula: F) -> Self
    where
        F: Fn(&[Scalar; N], &[Scalar]) -> Result<Vec<CScalar>> + Send + Sync + 'static,
    {
        let name = name.into();
        let label = name.clone();
        let transfer = move |params: &[Scalar], freqs: &[Scalar]| -> Result<Vec<CScalar>> {
            let params: &[Scalar; N] =
                params.try_into().map_err(|_| ValidationError::Arity {
                    element: label.clone(),
                    expected: N,
                    actual: params.len(),
                    values: params.to_vec(),
                })?;
            formula(params, freqs)
        };
        Self {
            name,
            arity: N,
            units: units.iter().map(|u| (*u).to_owned()).collect(),
            transfer: Arc::new(transfer),
        }
    }

    /// Returns the element name used as its registry key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of parameters the element takes.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Unit string for each parameter, in parameter order.
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Validates the inputs, then evaluates the impedance at every frequency.
    pub fn evaluate(&self, params: &[Scalar], freqs: &[Scalar]) -> Result<Vec<CScalar>> {
        validate(params, freqs, &self.name, self.arity)?;
        (self.transfer)(params, freqs)
    }

    /// Evaluates many parameter sets against one frequency vector in parallel.
    #[cfg(feature = "parallel")]
    pub fn evaluate_batch<P>(&self, param_sets: &[P], freqs: &[Scalar]) -> Result<Vec<Vec<CScalar>>>
    where
        P: AsRef<[Scalar]> + Sync,
    {
        use rayon::prelude::*;

        param_sets
            .par_iter()
            .map(|params| self.evaluate(params.as_ref(), freqs))
            .collect()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("units", &self.units)
            .finish()
    }
}
