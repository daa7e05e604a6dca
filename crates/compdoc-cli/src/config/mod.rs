//! Configuration for compdoc runs with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "compdoc.config.json";

/// Prefix for environment overrides (`COMPDOC_COMPACT`, `COMPDOC_JSX`, ...).
pub const ENV_PREFIX: &str = "COMPDOC_";

/// compdoc configuration - loaded from compdoc.config.json, the environment or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompdocConfig {
    /// Files or directories to document
    #[serde(default)]
    pub inputs: Vec<PathBuf>,

    /// Output file; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,

    /// File extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Parse `.js` files with JSX enabled
    #[serde(default)]
    pub jsx: bool,

    /// Emit single-line JSON
    #[serde(default)]
    pub compact: bool,
}

impl Default for CompdocConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            out: None,
            extensions: default_extensions(),
            jsx: false,
            compact: false,
        }
    }
}

impl CompdocConfig {
    /// Whether `extension` (without the dot) is one of the configured ones.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

fn default_extensions() -> Vec<String> {
    ["vue", "js", "jsx", "ts", "tsx"]
        .into_iter()
        .map(String::from)
        .collect()
}
