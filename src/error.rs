//! Error types.
//!
//! Logger construction, binding and retrieval never fail. Errors only come
//! from turning text into configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown severity level: {0:?}")]
    UnknownSeverity(String),

    #[error("invalid logger configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
