// src/recipe/kitchen/config.rs

//! Configuration types for the Kitchen

use semver::Version;
use std::path::PathBuf;

/// Configuration for the Kitchen
#[derive(Debug, Clone)]
pub struct KitchenConfig {
    /// Root of the library source tree
    pub source_dir: PathBuf,
    /// Root of the produced package tree
    pub output_dir: PathBuf,
    /// Fixed build workspace, kept after completion (for debugging)
    ///
    /// When unset, a temporary workspace is created per run and removed
    /// when the run finishes.
    pub build_dir: Option<PathBuf>,
    /// Number of parallel build jobs
    pub jobs: u32,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        let jobs = std::thread::available_parallelism()
            .map(|p| p.get() as u32)
            .unwrap_or(4);

        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("package"),
            build_dir: None,
            jobs,
        }
    }
}

/// Result of a packaging run
#[derive(Debug)]
pub struct PackageResult {
    /// Root of the produced package tree
    pub package_dir: PathBuf,
    /// Version advertised by the package, if discovery succeeded
    pub version: Option<Version>,
    /// Packaging log
    pub log: String,
    /// Warnings generated along the way
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_config_default() {
        let config = KitchenConfig::default();
        assert!(config.jobs > 0);
        assert!(config.build_dir.is_none());
        assert_eq!(config.output_dir, PathBuf::from("package"));
    }
}
