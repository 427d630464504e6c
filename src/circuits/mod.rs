//! Circuit elements, the reserved combinators, and the registry tying them together.

/// Reserved series/parallel combinators.
pub mod combinator;
/// Diffusion and distributed elements (Warburg, Gerischer, TLMQ).
pub mod diffusion;
/// Element descriptors and input validation.
pub mod element;
/// Lumped and relaxation elements.
pub mod lumped;
/// Closed-form pore-parameter solve for the spherical-diffusion elements.
pub mod pore;
/// Porous-electrode elements (Paasch and diffusion variants).
pub mod porous;
/// Name-to-element registry.
pub mod registry;

pub use combinator::{parallel, series, Combinator};
pub use element::{validate, Element, TransferFn};
pub use pore::{
    pore_parameters, pore_parameters_primary, pore_parameters_secondary, Branch, PoreParameters,
    PoreSolveError,
};
pub use porous::Interface;
pub use registry::{builtin_elements, register, strip_index_suffix, Entry, Registry};
