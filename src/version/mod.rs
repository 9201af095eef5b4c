// src/version/mod.rs

//! Version discovery for the packaged library
//!
//! The Bit::math build configuration declares its version through three
//! independent markers (`BIT_MATH_VERSION_MAJOR`, `_MINOR`, `_PATCH`) inside
//! `CMakeLists.txt`. Discovery is best-effort: an unreadable file or a
//! missing marker yields no version at all rather than a partial one, and
//! never aborts a packaging run. It only degrades the package's advertised
//! version.

use regex::Regex;
use semver::Version;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// The three marker patterns, in major/minor/patch order
///
/// Compiled once; the patterns are fixed, so only match or parse failures
/// can yield an absent version.
fn marker_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let compile = |name: &str| {
            Regex::new(&format!(r"BIT_MATH_VERSION_{}\s+([0-9]+)", name))
                .expect("version marker pattern")
        };
        [compile("MAJOR"), compile("MINOR"), compile("PATCH")]
    })
}

/// Extract one version component with its marker pattern
fn component(content: &str, re: &Regex) -> Option<u64> {
    re.captures(content)?.get(1)?.as_str().parse().ok()
}

/// Discover the library version from build-configuration text
///
/// All three markers must be present and numeric, otherwise the result is
/// `None`; a partial version is never produced.
pub fn discover_version(content: &str) -> Option<Version> {
    let [major_re, minor_re, patch_re] = marker_patterns();
    let major = component(content, major_re)?;
    let minor = component(content, minor_re)?;
    let patch = component(content, patch_re)?;
    Some(Version::new(major, minor, patch))
}

/// Discover the library version from a build-configuration file
///
/// An unreadable file is treated the same as missing markers.
pub fn discover_version_file(path: &Path) -> Option<Version> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    let version = discover_version(&content);
    if version.is_none() {
        debug!("No usable version markers in {}", path.display());
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMAKE_SOURCE: &str = r#"
cmake_minimum_required(VERSION 3.1)

set(BIT_MATH_VERSION_MAJOR 1 CACHE STRING "major version of bit::math" FORCE)
set(BIT_MATH_VERSION_MINOR 2 CACHE STRING "minor version of bit::math" FORCE)
set(BIT_MATH_VERSION_PATCH 3 CACHE STRING "patch version of bit::math" FORCE)

project(BitMath)
"#;

    #[test]
    fn test_discover_version_full() {
        let version = discover_version(CMAKE_SOURCE).unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_discover_version_bare_markers() {
        let content = "BIT_MATH_VERSION_MAJOR 1\nBIT_MATH_VERSION_MINOR 2\nBIT_MATH_VERSION_PATCH 3\n";
        let version = discover_version(content).unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_discover_version_missing_marker_is_none() {
        // No partial version when one marker is absent
        let content = "BIT_MATH_VERSION_MAJOR 1\nBIT_MATH_VERSION_MINOR 2\n";
        assert!(discover_version(content).is_none());
    }

    #[test]
    fn test_discover_version_non_numeric_is_none() {
        let content =
            "BIT_MATH_VERSION_MAJOR one\nBIT_MATH_VERSION_MINOR 2\nBIT_MATH_VERSION_PATCH 3\n";
        assert!(discover_version(content).is_none());
    }

    #[test]
    fn test_discover_version_empty_source() {
        assert!(discover_version("").is_none());
    }

    #[test]
    fn test_discover_version_repeated_calls() {
        // The marker patterns are shared across calls
        for _ in 0..3 {
            assert_eq!(discover_version(CMAKE_SOURCE).unwrap().to_string(), "1.2.3");
        }
        assert!(discover_version("BIT_MATH_VERSION_MAJOR x").is_none());
    }

    #[test]
    fn test_discover_version_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");
        std::fs::write(&path, CMAKE_SOURCE).unwrap();

        let version = discover_version_file(&path).unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_discover_version_file_unreadable_is_none() {
        let path = Path::new("/nonexistent/CMakeLists.txt");
        assert!(discover_version_file(path).is_none());
    }
}
