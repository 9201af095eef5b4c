// src/recipe/mod.rs

//! Recipe system for packaging the Bit::math library
//!
//! The recipe declares what gets packaged (metadata, exported sources, the
//! license file) and which options the package exposes. The Kitchen turns
//! that declaration into a fixed packaging sequence:
//!
//! 1. Stage exported sources into a build workspace
//! 2. Configure the external build tool with the derived definitions
//! 3. Optionally build the documentation target
//! 4. Install into the package tree
//! 5. Copy the license file into `licenses/`

mod definitions;
mod format;
mod kitchen;
pub mod parser;

pub use definitions::{
    BuildDefinitions, FLAG_GENERATE_DOCS, FLAG_INSTALL_DOCS, FLAG_SELF_CONTAINMENT_TESTS,
    FLAG_UNIT_TESTS,
};
pub use format::{PackageOptions, PackageSection, Recipe};
pub use kitchen::{BuildTool, CmakeBuild, Kitchen, KitchenConfig, PackageResult, DOCS_TARGET};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe};
