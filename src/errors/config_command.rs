use std::fmt;

use crate::{errors::config::ConfigError, impl_from};

#[derive(Debug)]
pub enum ConfigCommandError {
    Config(ConfigError),
    EmptyVars,
}

impl fmt::Display for ConfigCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigCommandError::*;
        match self {
            Config(e) => write!(f, "{}", e),
            EmptyVars => write!(f, "At least one variable name is required."),
        }
    }
}

impl std::error::Error for ConfigCommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigCommandError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl_from!(ConfigError => ConfigCommandError::Config);
