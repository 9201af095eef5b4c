// src/error.rs

//! Error types for the recipe orchestrator

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while packaging
///
/// Version discovery deliberately does not appear here: a missing or
/// malformed version marker is an expected condition and is modelled as an
/// absent value, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe file could not be parsed or failed validation
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required file or directory was missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid source staging pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A build-tool step exited with a failure status
    ///
    /// The diagnostic text is whatever the tool wrote to stderr; it is
    /// passed through untranslated.
    #[error("{phase} step failed with exit code {code:?}\nstderr: {stderr}")]
    ToolFailed {
        phase: String,
        code: Option<i32>,
        stderr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_tool_failed_display_carries_diagnostics() {
        let err = Error::ToolFailed {
            phase: "configure".to_string(),
            code: Some(2),
            stderr: "CMake Error at CMakeLists.txt".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("configure"));
        assert!(text.contains("CMake Error"));
    }
}
