//! Error handling for the compdoc CLI.
//!
//! `CliError` covers the broad failure categories of a run, `ConfigError`
//! carries configuration problems with a hint on how to fix them. Library
//! errors convert automatically via `#[from]`.
//!
//! # Example
//!
//! ```rust,no_run
//! use compdoc_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_input(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Inputs resolved to no component sources
    #[error("No component files found in the given inputs\n\nHint: Check the paths and the 'extensions' setting")]
    NoInputFiles,

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal errors
    #[error("Failed to walk input directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Errors from the extraction library
    #[error("Extraction error: {0}")]
    Docgen(#[from] compdoc::DocgenError),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Config file not found: {}\n\nHint: Create a compdoc.config.json file or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

/// Convert a CLI error into a miette report for the final exit.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Docgen(compdoc::DocgenError::Parse { path, message }) => miette::miette!(
            "Failed to parse {}: {}\n\nHint: Check the file for syntax errors or pass --jsx for JSX in .js files",
            path.display(),
            message
        ),
        _ => miette::miette!("{}", err),
    }
}
