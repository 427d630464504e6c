//! Convenience re-exports for building and evaluating equivalent circuits.

pub use crate::circuits::{
    combinator::{parallel, series, Combinator},
    element::{validate, Element, TransferFn},
    pore::{
        pore_parameters, pore_parameters_primary, pore_parameters_secondary, Branch,
        PoreParameters, PoreSolveError,
    },
    registry::{register, strip_index_suffix, Entry, Registry},
};
pub use crate::config::NumericPolicy;
pub use crate::constants::angular_frequency;
pub use crate::errors::{EisError, InputVector, ValidationError};
pub use crate::math::{CScalar, Scalar, J};
pub use crate::sweep::{linspace, logspace_hz, magnitude, phase_deg};
