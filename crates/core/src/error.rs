use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line_no} ({reason}): {line}")]
    MalformedLine {
        line_no: usize,
        line: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Charset '{0}' not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    pub(crate) fn malformed(line_no: usize, line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_no,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
