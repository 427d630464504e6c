//! The element registry.
//!
//! A [`Registry`] maps element names to [`Element`] descriptors. The series
//! (`s`) and parallel (`p`) combinators are permanent entries that can never
//! be shadowed. Built-in elements are installed once when the registry is
//! constructed; later additions go through [`Registry::register`].

use std::collections::{BTreeMap, BTreeSet};

use crate::circuits::combinator::Combinator;
use crate::circuits::diffusion;
use crate::circuits::element::Element;
use crate::circuits::lumped;
use crate::circuits::pore::Branch;
use crate::circuits::porous;
use crate::config::NumericPolicy;
use crate::errors::{EisError, Result};
use crate::math::{CScalar, Scalar};

const POROUS_DIFFUSION_UNITS: [&str; 6] = ["Ohm-m^2", "Ohm-m^2", "", "sec", "m^2", "s"];

/// Built-in element descriptors, closing over `policy` where the formula needs it.
#[must_use]
pub fn builtin_elements(policy: NumericPolicy) -> Vec<Element> {
    vec![
        Element::fixed("R", ["Ohm"], lumped::resistor),
        Element::fixed("C", ["F"], lumped::capacitor),
        Element::fixed("L", ["H"], lumped::inductor),
        Element::fixed("W", ["Ohm sec^-1/2"], diffusion::warburg),
        Element::fixed("Wo", ["Ohm", "sec"], diffusion::warburg_open),
        Element::fixed("Ws", ["Ohm", "sec"], diffusion::warburg_short),
        Element::fixed("CPE", ["Ohm^-1 sec^a", ""], lumped::constant_phase),
        Element::fixed("La", ["H sec", ""], lumped::modified_inductance),
        Element::fixed("G", ["Ohm", "sec"], diffusion::gerischer),
        Element::fixed("Gs", ["Ohm", "sec", ""], diffusion::gerischer_finite),
        Element::fixed("K", ["Ohm", "sec"], lumped::relaxation),
        Element::fixed("Zarc", ["Ohm", "sec", ""], lumped::zarc),
        Element::fixed(
            "TLMQ",
            ["Ohm", "F sec^(gamma - 1)", ""],
            diffusion::transmission_line_cpe,
        ),
        Element::fixed("T", ["Ohm-m^2", "Ohm-m^2", "", "sec"], move |p, f| {
            porous::paasch(p, f, &policy)
        }),
        Element::fixed("TDP", POROUS_DIFFUSION_UNITS, move |p, f| {
            porous::paasch_planar(p, f, &policy)
        }),
        Element::fixed("TDC", POROUS_DIFFUSION_UNITS, move |p, f| {
            porous::paasch_cylindrical(p, f, &policy)
        }),
        Element::try_fixed("TDS", POROUS_DIFFUSION_UNITS, move |p, f| {
            porous::paasch_spherical(p, f, Branch::Primary, &policy)
        }),
        Element::try_fixed("TDSS", POROUS_DIFFUSION_UNITS, move |p, f| {
            porous::paasch_spherical(p, f, Branch::Secondary, &policy)
        }),
    ]
}

/// Bare element type for an instance name.
///
/// Drops every digit and underscore, so `"R0"` and `"R1"` both map to `"R"`
/// and `"CPE_2"` maps to `"CPE"`.
#[must_use]
pub fn strip_index_suffix(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_ascii_digit() && *c != '_')
        .collect()
}

/// A registry lookup result.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    /// A parameterised element.
    Element(&'a Element),
    /// One of the reserved combinators.
    Combinator(Combinator),
}

/// Mapping from element name to descriptor, plus the reserved combinators.
#[derive(Debug, Clone)]
pub struct Registry {
    elements: BTreeMap<String, Element>,
    policy: NumericPolicy,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry holding every built-in element under the default numeric policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(NumericPolicy::default())
    }

    /// Registry holding every built-in element under `policy`.
    #[must_use]
    pub fn with_policy(policy: NumericPolicy) -> Self {
        let mut registry = Self::empty(policy);
        for element in builtin_elements(policy) {
            registry.elements.insert(element.name().to_owned(), element);
        }
        log::debug!(
            "initialised element registry with {} built-in elements",
            registry.elements.len()
        );
        registry
    }

    /// Registry holding only the combinators.
    #[must_use]
    pub fn empty(policy: NumericPolicy) -> Self {
        Self {
            elements: BTreeMap::new(),
            policy,
        }
    }

    /// Numeric policy the built-in elements were created with.
    #[must_use]
    pub fn policy(&self) -> &NumericPolicy {
        &self.policy
    }

    /// Adds `element` under its own name.
    ///
    /// Reserved combinator names always fail with
    /// [`EisError::ElementDefinition`]. An existing name fails with
    /// [`EisError::Overwrite`] unless `overwrite` is set, in which case the
    /// old descriptor is replaced.
    pub fn register(&mut self, element: Element, overwrite: bool) -> Result<()> {
        let name = element.name();
        if Combinator::from_symbol(name).is_some() {
            return Err(EisError::ElementDefinition(format!(
                "cannot redefine element '{name}': 's' (series) and 'p' (parallel) are reserved"
            )));
        }
        if self.elements.contains_key(name) {
            if !overwrite {
                return Err(EisError::Overwrite {
                    name: name.to_owned(),
                });
            }
            log::debug!("replacing element {name}");
        } else {
            log::debug!("registering element {name} ({} parameters)", element.arity());
        }
        self.elements.insert(name.to_owned(), element);
        Ok(())
    }

    /// Element descriptor for `name`.
    ///
    /// Combinator names are not elements and fail like unknown names.
    pub fn get(&self, name: &str) -> Result<&Element> {
        self.elements
            .get(name)
            .ok_or_else(|| EisError::Lookup(name.to_owned()))
    }

    /// Element or combinator for `name`.
    pub fn entry(&self, name: &str) -> Result<Entry<'_>> {
        match Combinator::from_symbol(name) {
            Some(combinator) => Ok(Entry::Combinator(combinator)),
            None => self.get(name).map(Entry::Element),
        }
    }

    /// True when `name` is an element or combinator.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        Combinator::from_symbol(name).is_some() || self.elements.contains_key(name)
    }

    /// Every registered name, combinators included.
    #[must_use]
    pub fn list_names(&self) -> BTreeSet<String> {
        Combinator::ALL
            .iter()
            .map(|c| c.symbol().to_owned())
            .chain(self.elements.keys().cloned())
            .collect()
    }

    /// Registered element descriptors in name order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Number of registered elements (combinators excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no elements are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Evaluates an element instance such as `"R0"` or `"CPE_1"`.
    pub fn evaluate(&self, instance: &str, params: &[Scalar], freqs: &[Scalar]) -> Result<Vec<CScalar>> {
        self.get(&strip_index_suffix(instance))?
            .evaluate(params, freqs)
    }
}

/// Adds `element` to `registry`; see [`Registry::register`].
pub fn register(registry: &mut Registry, element: Element, overwrite: bool) -> Result<()> {
    registry.register(element, overwrite)
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use super::*;

    fn constant(name: &str, value: f64) -> Element {
        Element::fixed(name, ["Ohm"], move |_: &[Scalar; 1], f: &[Scalar]| {
            vec![Complex::new(value, 0.0); f.len()]
        })
    }

    #[test]
    fn builtin_catalogue_is_complete() {
        let registry = Registry::new();
        let expected = [
            ("R", 1),
            ("C", 1),
            ("L", 1),
            ("W", 1),
            ("Wo", 2),
            ("Ws", 2),
            ("CPE", 2),
            ("La", 2),
            ("G", 2),
            ("Gs", 3),
            ("K", 2),
            ("Zarc", 3),
            ("TLMQ", 3),
            ("T", 4),
            ("TDP", 6),
            ("TDC", 6),
            ("TDS", 6),
            ("TDSS", 6),
        ];
        assert_eq!(registry.len(), expected.len());
        for (name, arity) in expected {
            let element = registry.get(name).unwrap();
            assert_eq!(element.arity(), arity, "{name}");
            assert_eq!(element.units().len(), arity, "{name}");
        }
    }

    #[test]
    fn builtin_names_are_unique_and_unreserved() {
        let elements = builtin_elements(NumericPolicy::default());
        let names: BTreeSet<&str> = elements.iter().map(Element::name).collect();
        assert_eq!(names.len(), elements.len());
        assert!(names.iter().all(|n| Combinator::from_symbol(n).is_none()));
    }

    #[test]
    fn list_names_includes_combinators() {
        let names = Registry::new().list_names();
        assert!(names.contains("s"));
        assert!(names.contains("p"));
        assert!(names.contains("CPE"));
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn reserved_names_are_rejected_regardless_of_overwrite() {
        let mut registry = Registry::new();
        for name in ["s", "p"] {
            for overwrite in [false, true] {
                let err = registry.register(constant(name, 1.0), overwrite).unwrap_err();
                assert!(matches!(err, EisError::ElementDefinition(_)));
            }
        }
        assert_eq!(registry.entry("s").ok().map(|e| matches!(e, Entry::Combinator(_))), Some(true));
    }

    #[test]
    fn duplicate_requires_overwrite() {
        let mut registry = Registry::new();
        let err = registry.register(constant("R", 1.0), false).unwrap_err();
        assert_eq!(err, EisError::Overwrite { name: "R".into() });

        // The built-in resistor is still in place.
        let z = registry.evaluate("R", &[5.0], &[1.0]).unwrap();
        assert_eq!(z[0], Complex::new(5.0, 0.0));

        register(&mut registry, constant("R", 42.0), true).unwrap();
        let z = registry.evaluate("R", &[5.0], &[1.0]).unwrap();
        assert_eq!(z[0], Complex::new(42.0, 0.0));
    }

    #[test]
    fn new_names_register_without_overwrite() {
        let mut registry = Registry::empty(NumericPolicy::default());
        assert!(registry.is_empty());
        registry.register(constant("X", 3.0), false).unwrap();
        assert!(registry.contains("X"));
        assert_eq!(registry.get("X").unwrap().units(), ["Ohm".to_owned()]);
    }

    #[test]
    fn unknown_and_combinator_names_are_not_elements() {
        let registry = Registry::new();
        assert_eq!(registry.get("Q").unwrap_err(), EisError::Lookup("Q".into()));
        assert!(registry.get("p").is_err());
        assert_eq!(
            registry.entry("p").ok().map(|e| matches!(e, Entry::Combinator(Combinator::Parallel))),
            Some(true)
        );
        assert!(registry.contains("p"));
    }

    #[test]
    fn strip_index_suffix_keys_instances() {
        assert_eq!(strip_index_suffix("R0"), "R");
        assert_eq!(strip_index_suffix("R12"), "R");
        assert_eq!(strip_index_suffix("CPE_1"), "CPE");
        assert_eq!(strip_index_suffix("Wo"), "Wo");
        assert_eq!(strip_index_suffix("TDSS_0"), "TDSS");
    }

    #[test]
    fn instance_names_evaluate_through_bare_type() {
        let registry = Registry::new();
        let z = registry.evaluate("C_3", &[1.0e-6], &[1.0]).unwrap();
        assert!(z[0].im < 0.0);
    }
}
