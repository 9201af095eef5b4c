// src/lib.rs

//! Bit::math package recipe
//!
//! Orchestrates packaging of the Bit::math C++ library: it discovers the
//! library version from the CMake build configuration, translates a small
//! option surface into CMake definitions, drives configure/build/install
//! through an external build tool, and bundles the license file into the
//! produced package tree.
//!
//! # Architecture
//!
//! - Recipe: declarative package metadata and option defaults (TOML)
//! - Kitchen: the build environment that runs the packaging sequence
//! - BuildTool: seam over the external build tool (CMake in production)
//! - Version discovery: best-effort, never aborts a packaging run

mod error;
pub mod recipe;
pub mod version;

pub use error::{Error, Result};
pub use recipe::{
    parse_recipe, parse_recipe_file, validate_recipe, BuildDefinitions, BuildTool, CmakeBuild,
    Kitchen, KitchenConfig, PackageOptions, PackageResult, Recipe,
};
pub use version::{discover_version, discover_version_file};
