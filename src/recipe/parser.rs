// src/recipe/parser.rs

//! Recipe file parsing

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<Recipe> {
    toml::from_str(content).map_err(|e| Error::Parse(format!("Invalid recipe: {}", e)))
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::NotFound(format!("Recipe file {}: {}", path.display(), e)))?;

    parse_recipe(&content)
}

/// Validate a recipe for completeness
///
/// Hard failures are returned as errors; soft problems come back as a list
/// of warnings.
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if recipe.package.name.is_empty() {
        return Err(Error::Parse("Recipe package name cannot be empty".to_string()));
    }
    if recipe.package.license_file.is_empty() {
        return Err(Error::Parse(
            "Recipe license_file cannot be empty".to_string(),
        ));
    }

    if recipe.package.description.is_none() {
        warnings.push("Missing package description".to_string());
    }
    if recipe.package.url.is_none() {
        warnings.push("Missing package url".to_string());
    }
    if recipe.package.exports_sources.is_empty() {
        warnings.push("No exports_sources; the source tree is used in place".to_string());
    }

    Ok(warnings)
}
