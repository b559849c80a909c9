use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed UTF-8. `offset` is the position of the first byte of the
    /// offending sequence; `bytes` holds the bytes read for it.
    #[error("invalid UTF-8 sequence {bytes:02x?} at byte offset {offset}")]
    Decode { offset: u64, bytes: Vec<u8> },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::config::ConfigBuilderError> for EngineError {
    fn from(err: crate::config::ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
