/// Failure reported by a host collaborator (code model, editor, selection).
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Host capability unavailable: {0}")]
    Unavailable(&'static str),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type HostResult<T> = std::result::Result<T, HostError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Session not ready: {0}")]
    NotReady(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
