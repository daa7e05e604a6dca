use crate::cli::ParseArgs;
use crate::config::{CONFIG_FILE_NAME, CompdocConfig, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_KEYS: [&str; 5] = ["inputs", "out", "extensions", "jsx", "compact"];

/// Values given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    inputs: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jsx: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compact: Option<bool>,
}

impl From<&ParseArgs> for CliOverrides {
    fn from(args: &ParseArgs) -> Self {
        Self {
            inputs: (!args.inputs.is_empty()).then(|| args.inputs.clone()),
            out: args.out.clone(),
            jsx: args.jsx.then_some(true),
            compact: args.compact.then_some(true),
        }
    }
}

impl CompdocConfig {
    /// Load configuration from multiple sources.
    ///
    /// Priority: CLI args > environment variables > config file > defaults.
    /// An explicit `--config` path must exist; the default file is optional.
    pub fn load(args: &ParseArgs, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file(args.config.as_deref(), cwd)? {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
            .merge(Serialized::defaults(CliOverrides::from(args)));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {CONFIG_FILE_NAME} syntax and field types"),
            }
            .into()
        })
    }
}

fn config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = crate::commands::resolve_path(path, cwd);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Ok(Some(path))
        }
        None => {
            let default_path = cwd.join(CONFIG_FILE_NAME);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}
