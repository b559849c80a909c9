// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad command line, detected before any input is touched.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Engine(#[from] unistat_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
