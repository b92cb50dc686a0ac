use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{DEFAULT_PROJECT_ID, DEFAULT_VARS};
use crate::errors::config::ConfigError;
use crate::utils::{get_config_path, get_env_token};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(rename = "projectID", default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_vars")]
    pub vars: Vec<String>,
}

fn default_project_id() -> String {
    DEFAULT_PROJECT_ID.to_string()
}

fn default_vars() -> Vec<String> {
    DEFAULT_VARS.iter().map(|v| v.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: String::new(),
            project_id: default_project_id(),
            vars: default_vars(),
        }
    }
}

/// Resolves the config used by the `api` commands.
pub fn load() -> Result<Config, ConfigError> {
    let path = get_config_path()?;
    load_from(&path, get_env_token())
}

/// A token from the environment wins over the file token. Without one, a
/// missing file is bootstrapped with defaults and reported as not initialized.
pub fn load_from(path: &Path, env_token: Option<String>) -> Result<Config, ConfigError> {
    let mut config = match (read_config(path)?, env_token.is_some()) {
        (Some(config), _) => config,
        (None, true) => Config::default(),
        (None, false) => {
            save(path, &Config::default())?;
            info!("Created default config at {}", path.display());
            return Err(ConfigError::NotInitialized {
                path: path.to_path_buf(),
            });
        }
    };

    if let Some(token) = env_token {
        debug!("Using token from environment");
        config.token = token;
    }

    if config.token.trim().is_empty() {
        return Err(ConfigError::MissingToken);
    }

    Ok(config)
}

/// Loads the file for editing; a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    Ok(read_config(path)?.unwrap_or_default())
}

fn read_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = serde_json::from_str::<Config>(&content).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(config))
}

pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let serialized = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    fs::write(path, serialized).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Config saved at {}", path.display());
    Ok(())
}
