use crate::config::CompdocConfig;
use crate::error::{ConfigError, Result};

impl CompdocConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(ConfigError::MissingField {
                field: "inputs".to_string(),
                hint: "Pass files or directories to document, or list them under 'inputs'"
                    .to_string(),
            }
            .into());
        }

        if self.inputs.iter().any(|input| input.as_os_str().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "inputs".to_string(),
                value: "\"\"".to_string(),
                hint: "Input paths cannot be empty".to_string(),
            }
            .into());
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "List at least one extension, e.g. [\"vue\", \"ts\"]".to_string(),
            }
            .into());
        }

        if let Some(empty) = self
            .extensions
            .iter()
            .find(|extension| extension.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: format!("{empty:?}"),
                hint: "Extensions cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
