// src/recipe/format.rs

//! Recipe file format definitions
//!
//! Recipes are TOML files describing how the Bit::math library is packaged:
//! package metadata, which source files are exported into the build
//! workspace, and the defaults for the user-selectable options.

use serde::{Deserialize, Serialize};

/// A complete packaging recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Package metadata
    pub package: PackageSection,

    /// Option defaults (all off unless the recipe says otherwise)
    #[serde(default)]
    pub options: PackageOptions,
}

impl Recipe {
    /// Identity under which the produced artifact is distributed
    ///
    /// Every settings/options combination collapses to the same identity:
    /// the package is published as a single variant no matter how it was
    /// configured. This is deliberate policy, not an oversight.
    pub fn package_id(&self) -> String {
        self.package.name.clone()
    }
}

/// Package metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Author
    #[serde(default)]
    pub author: Option<String>,

    /// Homepage URL
    #[serde(default)]
    pub url: Option<String>,

    /// License file bundled into the package, relative to the source tree
    #[serde(default = "default_license_file")]
    pub license_file: String,

    /// Build-configuration file the version markers are read from,
    /// relative to the source tree
    #[serde(default = "default_version_source")]
    pub version_source: String,

    /// Glob patterns for the sources staged into the build workspace
    ///
    /// Empty means the source tree is used in place.
    #[serde(default)]
    pub exports_sources: Vec<String>,
}

fn default_license_file() -> String {
    "LICENSE.md".to_string()
}

fn default_version_source() -> String {
    "CMakeLists.txt".to_string()
}

/// User-selectable package options
///
/// `shared` is part of the declared surface but is not consulted when
/// deriving build definitions; see the definitions module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageOptions {
    /// Build and install the generated documentation
    pub install_docs: bool,

    /// Accepted but currently not wired to any build definition
    pub shared: bool,
}

impl PackageOptions {
    /// Apply command-line overrides on top of the recipe defaults
    ///
    /// `None` leaves the recipe's value in place; `Some` wins either way,
    /// so a recipe default of `true` can be switched off from the CLI.
    pub fn merge_cli(self, install_docs: Option<bool>, shared: Option<bool>) -> Self {
        Self {
            install_docs: install_docs.unwrap_or(self.install_docs),
            shared: shared.unwrap_or(self.shared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RECIPE: &str = r#"
[package]
name = "BitMath"
description = "A math library"
author = "bitwizeshift"
url = "https://github.com/bitwizeshift/bit-math"
exports_sources = [
    "CMakeLists.txt",
    "include/*",
    "src/*",
    "LICENSE.md",
]

[options]
install_docs = false
shared = false
"#;

    #[test]
    fn test_parse_recipe() {
        let recipe: Recipe = toml::from_str(SAMPLE_RECIPE).unwrap();

        assert_eq!(recipe.package.name, "BitMath");
        assert_eq!(recipe.package.description.as_deref(), Some("A math library"));
        assert_eq!(recipe.package.license_file, "LICENSE.md");
        assert_eq!(recipe.package.version_source, "CMakeLists.txt");
        assert_eq!(recipe.package.exports_sources.len(), 4);
        assert!(!recipe.options.install_docs);
        assert!(!recipe.options.shared);
    }

    #[test]
    fn test_minimal_recipe_defaults() {
        let minimal = r#"
[package]
name = "BitMath"
"#;
        let recipe: Recipe = toml::from_str(minimal).unwrap();
        assert_eq!(recipe.package.license_file, "LICENSE.md");
        assert_eq!(recipe.package.version_source, "CMakeLists.txt");
        assert!(recipe.package.exports_sources.is_empty());
        assert_eq!(recipe.options, PackageOptions::default());
    }

    #[test]
    fn test_merge_cli_none_keeps_recipe_defaults() {
        let defaults = PackageOptions {
            install_docs: true,
            shared: false,
        };
        assert_eq!(defaults.merge_cli(None, None), defaults);
    }

    #[test]
    fn test_merge_cli_overrides_in_both_directions() {
        let defaults = PackageOptions {
            install_docs: true,
            shared: false,
        };

        // A recipe default of true can be switched off from the CLI
        let merged = defaults.merge_cli(Some(false), Some(true));
        assert!(!merged.install_docs);
        assert!(merged.shared);

        let merged = PackageOptions::default().merge_cli(Some(true), None);
        assert!(merged.install_docs);
        assert!(!merged.shared);
    }

    #[test]
    fn test_package_id_collapses_over_options() {
        let mut recipe: Recipe = toml::from_str(SAMPLE_RECIPE).unwrap();
        let base = recipe.package_id();

        for (install_docs, shared) in
            [(false, false), (false, true), (true, false), (true, true)]
        {
            recipe.options = PackageOptions {
                install_docs,
                shared,
            };
            assert_eq!(recipe.package_id(), base);
        }
    }
}
