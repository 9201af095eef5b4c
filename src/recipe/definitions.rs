// src/recipe/definitions.rs

//! Build definition derivation
//!
//! Translates the recipe options into the `"ON"`/`"OFF"` definitions handed
//! to the external build tool. Two policies are fixed here and are not
//! configurable:
//!
//! - the self-containment and unit-test flags are always forced OFF,
//! - docs generation and docs installation are coupled: both follow
//!   `install_docs`, there is no way to generate without installing.

use crate::recipe::format::PackageOptions;
use std::collections::BTreeMap;

/// Header self-containment test compilation, always OFF
pub const FLAG_SELF_CONTAINMENT_TESTS: &str = "BIT_MATH_COMPILE_HEADER_SELF_CONTAINMENT_TESTS";
/// Unit test compilation, always OFF
pub const FLAG_UNIT_TESTS: &str = "BIT_MATH_COMPILE_UNIT_TESTS";
/// Documentation generation, follows `install_docs`
pub const FLAG_GENERATE_DOCS: &str = "BIT_MATH_GENERATE_DOCS";
/// Documentation installation, follows `install_docs`
pub const FLAG_INSTALL_DOCS: &str = "BIT_MATH_INSTALL_DOCS";

/// The definitions passed to the build tool's configure step
///
/// Derived fresh on every packaging run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDefinitions {
    flags: BTreeMap<String, String>,
}

impl BuildDefinitions {
    /// Derive definitions from the package options
    ///
    /// Pure function of its input. `shared` is accepted but maps to no
    /// definition.
    pub fn derive(options: &PackageOptions) -> Self {
        let docs = on_off(options.install_docs);

        let mut flags = BTreeMap::new();
        flags.insert(FLAG_SELF_CONTAINMENT_TESTS.to_string(), "OFF".to_string());
        flags.insert(FLAG_UNIT_TESTS.to_string(), "OFF".to_string());
        flags.insert(FLAG_GENERATE_DOCS.to_string(), docs.to_string());
        flags.insert(FLAG_INSTALL_DOCS.to_string(), docs.to_string());

        Self { flags }
    }

    /// Look up a flag value
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.flags.get(flag).map(|v| v.as_str())
    }

    /// Iterate over flags in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of flags
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether there are no flags
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}
