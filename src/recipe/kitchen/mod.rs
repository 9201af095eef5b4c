// src/recipe/kitchen/mod.rs

//! Kitchen: the build environment where the recipe is cooked
//!
//! The Kitchen owns one packaging run: it stages the exported sources into a
//! build workspace, configures the external build tool with the derived
//! definitions, optionally builds the documentation target, runs the install
//! step, and bundles the license file into the package tree. The sequence is
//! strictly linear; any step failure aborts the run and leaves the output
//! tree in whatever state the external tool left it.

mod cmake;
mod config;

pub use cmake::{BuildTool, CmakeBuild};
pub use config::{KitchenConfig, PackageResult};

use crate::error::{Error, Result};
use crate::recipe::definitions::BuildDefinitions;
use crate::recipe::format::Recipe;
use crate::recipe::parser::validate_recipe;
use crate::version;
use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info, warn};

/// Build target that generates the library documentation
pub const DOCS_TARGET: &str = "math_docs";

/// Subdirectory of the package tree receiving the license file
const LICENSE_DIR: &str = "licenses";

/// The Kitchen: where the recipe is cooked into a package tree
pub struct Kitchen {
    config: KitchenConfig,
    /// Version discovered at construction; immutable afterwards
    version: Option<Version>,
}

enum Workspace {
    Temp(TempDir),
    Kept(PathBuf),
}

impl Workspace {
    fn path(&self) -> &Path {
        match self {
            Workspace::Temp(dir) => dir.path(),
            Workspace::Kept(path) => path,
        }
    }
}

impl Kitchen {
    /// Create a Kitchen for a recipe
    ///
    /// The library version is discovered here, once, from the recipe's
    /// version source. Discovery failure is not an error: the package is
    /// simply produced without an advertised version.
    pub fn new(config: KitchenConfig, recipe: &Recipe) -> Self {
        let version_source = config.source_dir.join(&recipe.package.version_source);
        let version = version::discover_version_file(&version_source);

        match &version {
            Some(v) => info!("Discovered {} version {}", recipe.package.name, v),
            None => warn!(
                "No version discovered from {}; packaging continues without one",
                version_source.display()
            ),
        }

        Self { config, version }
    }

    /// The version the package will advertise, if discovery succeeded
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    /// Package the library with the default CMake build tool
    pub fn package_cmake(&self, recipe: &Recipe) -> Result<PackageResult> {
        let mut tool =
            CmakeBuild::new(self.config.output_dir.clone()).with_jobs(self.config.jobs);
        self.package(recipe, &mut tool)
    }

    /// Package the library using the given build tool
    ///
    /// The sequence is fixed: stage, configure, docs target (only when
    /// `install_docs` is set, and always before install), install, license
    /// copy. Each step's failure is fatal; there is no retry or rollback.
    pub fn package(&self, recipe: &Recipe, tool: &mut dyn BuildTool) -> Result<PackageResult> {
        let warnings = validate_recipe(recipe)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        info!(
            "Packaging {} {}",
            recipe.package.name,
            self.version
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "(unknown version)".to_string())
        );

        let mut log = String::new();
        let workspace = self.workspace()?;
        let source_dir = self.stage(recipe, workspace.path(), &mut log)?;

        let build_dir = workspace.path().join("build");
        fs::create_dir_all(&build_dir)?;
        fs::create_dir_all(&self.config.output_dir)?;

        let definitions = BuildDefinitions::derive(&recipe.options);
        info!("Configuring with {} definitions", definitions.len());
        tool.configure(&source_dir, &build_dir, &definitions)?;
        log.push_str("Configured build\n");

        // Install must see already-built docs, so the docs target runs first.
        if recipe.options.install_docs {
            info!("Building documentation target {}", DOCS_TARGET);
            tool.build_target(&build_dir, DOCS_TARGET)?;
            log.push_str("Built documentation\n");
        }

        info!("Installing into {}", self.config.output_dir.display());
        tool.install(&build_dir)?;
        log.push_str("Installed package tree\n");

        let license = self.bundle_license(recipe, &source_dir)?;
        log.push_str(&format!("Bundled license: {}\n", license.display()));

        info!(
            "Packaged {} into {}",
            recipe.package_id(),
            self.config.output_dir.display()
        );

        Ok(PackageResult {
            package_dir: self.config.output_dir.clone(),
            version: self.version.clone(),
            log,
            warnings,
        })
    }

    fn workspace(&self) -> Result<Workspace> {
        match &self.config.build_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Ok(Workspace::Kept(dir.clone()))
            }
            None => Ok(Workspace::Temp(TempDir::new()?)),
        }
    }

    /// Stage exported sources into the workspace
    ///
    /// With no `exports_sources` patterns the source tree is used in place.
    fn stage(&self, recipe: &Recipe, workspace: &Path, log: &mut String) -> Result<PathBuf> {
        if recipe.package.exports_sources.is_empty() {
            return Ok(self.config.source_dir.clone());
        }

        let staged = workspace.join("source");
        fs::create_dir_all(&staged)?;

        let mut count = 0usize;
        for pattern in &recipe.package.exports_sources {
            let full = self.config.source_dir.join(pattern);
            for entry in glob::glob(&full.to_string_lossy())? {
                let path = entry.map_err(|e| Error::Io(e.into()))?;
                let relative = path
                    .strip_prefix(&self.config.source_dir)
                    .unwrap_or(&path)
                    .to_path_buf();
                count += copy_entry(&path, &staged.join(relative))?;
            }
        }

        if count == 0 {
            return Err(Error::NotFound(format!(
                "No sources matched exports_sources under {}",
                self.config.source_dir.display()
            )));
        }

        debug!("Staged {} source file(s)", count);
        log.push_str(&format!("Staged {} source file(s)\n", count));
        Ok(staged)
    }

    /// Copy the license file into the package's licensing directory
    fn bundle_license(&self, recipe: &Recipe, source_dir: &Path) -> Result<PathBuf> {
        let src = source_dir.join(&recipe.package.license_file);
        if !src.exists() {
            return Err(Error::NotFound(format!(
                "License file {}",
                src.display()
            )));
        }

        let name = Path::new(&recipe.package.license_file)
            .file_name()
            .ok_or_else(|| {
                Error::Parse(format!(
                    "Invalid license_file: {}",
                    recipe.package.license_file
                ))
            })?;

        let license_dir = self.config.output_dir.join(LICENSE_DIR);
        fs::create_dir_all(&license_dir)?;

        let dst = license_dir.join(name);
        fs::copy(&src, &dst)?;
        Ok(dst)
    }
}

/// Copy a file, or a directory tree recursively, returning the file count
fn copy_entry(src: &Path, dst: &Path) -> Result<usize> {
    if src.is_dir() {
        fs::create_dir_all(dst)?;
        let mut count = 0;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            count += copy_entry(&entry.path(), &dst.join(entry.file_name()))?;
        }
        Ok(count)
    } else {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dst)?;
        Ok(1)
    }
}
