use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::constants::{APP_NAME, TOKEN_ENV};

#[derive(Debug)]
pub enum ConfigError {
    ExecutableNotFound(io::Error),
    NotInitialized { path: PathBuf },
    MissingToken,
    Read { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, source: serde_json::Error },
    Write { path: PathBuf, source: io::Error },
    Serialize(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            ExecutableNotFound(e) => write!(f, "Could not find executable: {}", e),
            NotInitialized { path } => write!(
                f,
                "Config not initialized. A default config was written to {}, run '{} config token' first.",
                path.display(),
                APP_NAME
            ),
            MissingToken => write!(
                f,
                "No token configured. Set {} or run '{} config token'.",
                TOKEN_ENV, APP_NAME
            ),
            Read { path, source } => {
                write!(f, "Could not read config file {}: {}", path.display(), source)
            }
            Decode { path, source } => {
                write!(f, "Could not decode config file {}: {}", path.display(), source)
            }
            Write { path, source } => {
                write!(f, "Could not write config file {}: {}", path.display(), source)
            }
            Serialize(e) => write!(f, "Could not serialize config: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use ConfigError::*;
        match self {
            ExecutableNotFound(e) => Some(e),
            Read { source, .. } => Some(source),
            Decode { source, .. } => Some(source),
            Write { source, .. } => Some(source),
            Serialize(e) => Some(e),
            _ => None,
        }
    }
}
