use std::error::Error;
use std::fmt;

use crate::constants::APP_NAME;

#[derive(Debug)]
pub enum NetworkError {
    Http {
        message: String,
        source: reqwest::Error,
    },
    Read {
        message: String,
        source: reqwest::Error,
    },
    Json {
        message: String,
        source: serde_json::Error,
    },
    Unauthorized,
    NoEnvironments {
        project_id: String,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use NetworkError::*;
        match self {
            Http { message, source } => write!(f, "{}: {}", message, source),
            Read { message, source } => write!(f, "{}: {}", message, source),
            Json { message, source } => write!(f, "{}: {}", message, source),
            Unauthorized => write!(
                f,
                "HTTP ERROR: token might be invalid or expired. Run '{} config token' to set a new one.",
                APP_NAME
            ),
            NoEnvironments { project_id } => {
                write!(f, "No environments found in project {}", project_id)
            }
        }
    }
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetworkError::Http { source, .. } => Some(source),
            NetworkError::Read { source, .. } => Some(source),
            NetworkError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

// reqwest puts the request URL, and with it the private token, in its message.
impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_body() || e.is_decode() {
            NetworkError::Read {
                message: "Can't read response".to_string(),
                source: e,
            }
        } else {
            NetworkError::Http {
                message: "Can't connect".to_string(),
                source: e,
            }
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        NetworkError::Json {
            message: "Unexpected response from environments API".to_string(),
            source: e,
        }
    }
}
