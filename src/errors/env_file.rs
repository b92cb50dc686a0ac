use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum EnvFileError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for EnvFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnvFileError::*;
        match self {
            Read { path, source } => write!(f, "Cannot read {} file: {}", path.display(), source),
            Write { path, source } => write!(f, "Cannot write {} file: {}", path.display(), source),
        }
    }
}

impl Error for EnvFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EnvFileError::Read { source, .. } | EnvFileError::Write { source, .. } => Some(source),
        }
    }
}
