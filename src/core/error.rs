use thiserror::Error;

use crate::core::types::Timestamp;

#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("Invalid deployment data: {0}")]
    InvalidDeployment(String),

    #[error("Invalid decreasing timestamp: {current} follows {previous}")]
    DecreasingTimestamp { previous: Timestamp, current: Timestamp },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Malformed deployment on line {line}: {text:?}")]
    MalformedRecord { line: usize, text: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GalaxyError>;
