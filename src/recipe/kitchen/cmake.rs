// src/recipe/kitchen/cmake.rs

//! The external build tool seam and its CMake implementation
//!
//! The Kitchen only needs three capabilities from the build tool: configure
//! with definitions, build a named target, and install. `CmakeBuild` shells
//! out to `cmake` for all three; tests substitute a recording double.

use crate::error::{Error, Result};
use crate::recipe::definitions::BuildDefinitions;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// The capabilities the Kitchen requires from an external build tool
///
/// Each call blocks until the underlying process completes or fails. A
/// failure aborts the packaging sequence; there is no retry or rollback.
pub trait BuildTool {
    /// Configure the build with the given definitions
    fn configure(
        &mut self,
        source_dir: &Path,
        build_dir: &Path,
        definitions: &BuildDefinitions,
    ) -> Result<()>;

    /// Build a named target
    fn build_target(&mut self, build_dir: &Path, target: &str) -> Result<()>;

    /// Run the install step
    fn install(&mut self, build_dir: &Path) -> Result<()>;
}

/// CMake-backed build tool
pub struct CmakeBuild {
    program: String,
    install_prefix: PathBuf,
    jobs: Option<u32>,
}

impl CmakeBuild {
    /// Create a CMake tool installing into the given prefix
    pub fn new(install_prefix: impl Into<PathBuf>) -> Self {
        Self {
            program: "cmake".to_string(),
            install_prefix: install_prefix.into(),
            jobs: None,
        }
    }

    /// Override the cmake executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the parallel job count for target builds
    pub fn with_jobs(mut self, jobs: u32) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Run one build step, propagating the tool's own diagnostics on failure
    fn run_step(&self, phase: &str, command: &mut Command) -> Result<()> {
        debug!("Running {} step: {:?}", phase, command);

        let output = command.output()?;
        if !output.status.success() {
            return Err(Error::ToolFailed {
                phase: phase.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

impl BuildTool for CmakeBuild {
    fn configure(
        &mut self,
        source_dir: &Path,
        build_dir: &Path,
        definitions: &BuildDefinitions,
    ) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-S").arg(source_dir).arg("-B").arg(build_dir);
        cmd.arg(format!(
            "-DCMAKE_INSTALL_PREFIX={}",
            self.install_prefix.display()
        ));
        for (flag, value) in definitions.iter() {
            cmd.arg(format!("-D{}={}", flag, value));
        }
        self.run_step("configure", &mut cmd)
    }

    fn build_target(&mut self, build_dir: &Path, target: &str) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--build").arg(build_dir).arg("--target").arg(target);
        if let Some(jobs) = self.jobs {
            cmd.arg("--parallel").arg(jobs.to_string());
        }
        self.run_step("build", &mut cmd)
    }

    fn install(&mut self, build_dir: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--install").arg(build_dir);
        self.run_step("install", &mut cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_reports_io_error() {
        let mut tool =
            CmakeBuild::new("/tmp/prefix").with_program("definitely-not-a-real-cmake-binary");
        let defs = BuildDefinitions::derive(&Default::default());
        let err = tool
            .configure(Path::new("."), Path::new("/tmp/build"), &defs)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_failed_step_carries_stderr() {
        // `false` exits non-zero with no output; any argv is ignored
        let mut tool = CmakeBuild::new("/tmp/prefix").with_program("false");
        let err = tool.install(Path::new("/tmp/build")).unwrap_err();
        match err {
            Error::ToolFailed { phase, code, .. } => {
                assert_eq!(phase, "install");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
