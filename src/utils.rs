use std::env;
use std::path::PathBuf;

use crate::constants::{CONFIG_FILE_NAME, TOKEN_ENV};
use crate::errors::config::ConfigError;

/// The config file lives next to the running executable.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let exe_path = env::current_exe().map_err(ConfigError::ExecutableNotFound)?;
    let dir = exe_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(dir.join(CONFIG_FILE_NAME))
}

pub fn get_env_token() -> Option<String> {
    match env::var(TOKEN_ENV) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
    }
}
