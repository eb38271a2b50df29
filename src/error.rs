//! Error types for parsing, configuration and rendering.
//!
//! Tree mutations and layout are total and never produce these.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FishboneError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid cause tree: {0}")]
    InvalidTree(String),

    #[error("Unknown output format '{0}'; use json or svg")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FishboneError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FishboneError>;
