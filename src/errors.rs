//! Defines the custom error types for the application.
//!
//! This uses `thiserror` for clean, boilerplate-free error handling.
//! An invalid (partial) record is not an error: it is reported through
//! [`crate::diagnostics::Diagnostics`] and parsing continues.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Error reading dependencies from file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing dependencies to XML file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No dependencies found in the input file: {}", .0.display())]
    EmptyResult(PathBuf),

    #[error("Malformed line {line}: expected '<key> = value' in {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Failed to write diagnostics report: {}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dependency XML: {0}")]
    ParseError(String),
}

impl ConverterError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConverterError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConverterError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_read_error_keeps_cause() {
        let err = ConverterError::read(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.txt"));
        assert_eq!(err.source().unwrap().to_string(), "no such file");
    }

    #[test]
    fn test_malformed_line_message() {
        let err = ConverterError::MalformedLine {
            line: 3,
            content: "groupId org.example".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed line 3: expected '<key> = value' in \"groupId org.example\""
        );
    }
}
