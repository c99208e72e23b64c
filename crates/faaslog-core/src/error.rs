use std::{fmt, path::PathBuf};

/// Errors from loading logger configuration. Formatting itself never fails.
#[derive(Debug)]
pub enum LogError {
    /// I/O error reading a file.
    Io { path: PathBuf, source: std::io::Error },
    /// JSON parse error for a file.
    Json { path: PathBuf, source: serde_json::Error },
    /// Config is syntactically valid but semantically invalid.
    InvalidConfig { path: PathBuf, msg: String },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Io { path, source } => {
                write!(f, "I/O error for {}: {}", path.display(), source)
            }
            LogError::Json { path, source } => {
                write!(f, "JSON parse error for {}: {}", path.display(), source)
            }
            LogError::InvalidConfig { path, msg } => {
                write!(f, "Invalid config {}: {}", path.display(), msg)
            }
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io { source, .. } => Some(source),
            LogError::Json { source, .. } => Some(source),
            LogError::InvalidConfig { .. } => None,
        }
    }
}
