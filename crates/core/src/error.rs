use thiserror::Error;
use truegoto_api::{ApiError, HostError};

#[derive(Error, Debug)]
pub enum TrueGotoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Host error: {0}")]
    Host(#[from] HostError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TrueGotoError> for ApiError {
    fn from(err: TrueGotoError) -> Self {
        match err {
            TrueGotoError::Host(host) => ApiError::Host(host),
            TrueGotoError::Config(msg) => ApiError::InvalidArgument(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrueGotoError>;
