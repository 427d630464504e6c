//! The reserved series (`s`) and parallel (`p`) combinators.
//!
//! Both take already-evaluated impedance vectors. All inputs are expected to
//! have the length of the first one; shorter inputs only contribute to the
//! indices they cover and longer inputs are truncated.

use crate::math::{reciprocal, CScalar};

/// How a group of impedance vectors is combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Series connection (impedances add linearly).
    Series,
    /// Parallel connection (admittances add linearly).
    Parallel,
}

impl Combinator {
    /// Both combinators, in registry order.
    pub const ALL: [Self; 2] = [Self::Series, Self::Parallel];

    /// Reserved registry name.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Series => "s",
            Self::Parallel => "p",
        }
    }

    /// Parses a reserved name.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Combines the impedance vectors.
    #[must_use]
    pub fn apply<B: AsRef<[CScalar]>>(self, branches: &[B]) -> Vec<CScalar> {
        match self {
            Self::Series => series(branches),
            Self::Parallel => parallel(branches),
        }
    }
}

/// Element-wise sum `Z = Z1 + Z2 + ... + Zn`.
#[must_use]
pub fn series<B: AsRef<[CScalar]>>(branches: &[B]) -> Vec<CScalar> {
    let mut total = zeros_like_first(branches);
    for branch in branches {
        for (acc, z) in total.iter_mut().zip(branch.as_ref()) {
            *acc += *z;
        }
    }
    total
}

/// Element-wise `Z = 1 / (1/Z1 + 1/Z2 + ... + 1/Zn)`.
///
/// A zero impedance is not special-cased: the quotient follows ordinary
/// complex division and propagates as non-finite values.
#[must_use]
pub fn parallel<B: AsRef<[CScalar]>>(branches: &[B]) -> Vec<CScalar> {
    let mut admittance = zeros_like_first(branches);
    for branch in branches {
        for (acc, z) in admittance.iter_mut().zip(branch.as_ref()) {
            *acc += reciprocal(*z);
        }
    }
    admittance.into_iter().map(reciprocal).collect()
}

fn zeros_like_first<B: AsRef<[CScalar]>>(branches: &[B]) -> Vec<CScalar> {
    let len = branches.first().map_or(0, |b| b.as_ref().len());
    vec![CScalar::default(); len]
}
