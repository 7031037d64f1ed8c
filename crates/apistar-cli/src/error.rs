//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling the
//! various failure modes of the CLI application. Caught validation
//! failures are rendered as diagnostics and never reach this type;
//! everything here terminates the process with a non-zero status.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Fatal failure of the validation adapter
    #[error("Schema error: {0}")]
    Schema(#[from] apistar_schemas::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Documentation build failure
    #[error("Docs build error: {0}")]
    Docs(#[from] apistar_docs::DocsError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Schema(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Docs(_) => 4,
            Self::Config(_) => 5,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            Error::Io(io::Error::new(io::ErrorKind::Other, "x")),
            Error::FileNotFound {
                path: PathBuf::from("missing.json"),
            },
            Error::Config("bad".to_string()),
            Error::other("anything"),
        ];
        let codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        for (i, code) in codes.iter().enumerate() {
            assert_ne!(*code, 0);
            for later in &codes[i + 1..] {
                assert_ne!(code, later);
            }
        }
    }

    #[test]
    fn test_format_error_without_color() {
        let error = Error::other("something broke");
        assert_eq!(format_error(&error, false), "Error: something broke");
    }
}
