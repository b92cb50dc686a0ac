use std::fmt;

use crate::{
    errors::{config::ConfigError, env_file::EnvFileError, network::NetworkError},
    impl_from,
};

#[derive(Debug)]
pub enum ApiError {
    Config(ConfigError),
    Network(NetworkError),
    EnvFile(EnvFileError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ApiError::*;
        match self {
            Config(e) => write!(f, "{}", e),
            Network(e) => write!(f, "{}", e),
            EnvFile(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ApiError::*;
        match self {
            Config(e) => Some(e),
            Network(e) => Some(e),
            EnvFile(e) => Some(e),
        }
    }
}

impl_from!(ConfigError => ApiError::Config);
impl_from!(NetworkError => ApiError::Network);
impl_from!(EnvFileError => ApiError::EnvFile);
