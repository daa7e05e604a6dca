use std::path::PathBuf;

use thiserror::Error;

use crate::sfc::SfcError;

/// Result type alias for documentation extraction.
pub type Result<T> = std::result::Result<T, DocgenError>;

/// Error variants for documentation extraction and rendering.
///
/// Unsupported syntax never produces an error: handlers skip what they cannot
/// describe. These variants cover the surrounding I/O and parsing only.
#[derive(Debug, Error)]
pub enum DocgenError {
    /// Failed to read or access a source file.
    #[error("failed to read source '{path}': {error}")]
    Io {
        /// Path to the source file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Parsing the script with OXC failed.
    #[error("failed to parse source '{path}': {message}")]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser error message.
        message: String,
    },

    /// The single-file component could not be split into script blocks.
    #[error("failed to read script blocks of '{path}': {error}")]
    Sfc {
        /// Path to the component file.
        path: PathBuf,
        /// Underlying extraction error.
        #[source]
        error: SfcError,
    },

    /// Generic error variant.
    #[error("{message}")]
    Other {
        /// Human-readable error message.
        message: String,
    },
}

impl DocgenError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }
}
