use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("resource not found: {id}")]
    NotFound { id: String },

    #[error("resource already exists: {id}")]
    AlreadyExists { id: String },

    #[error("{0} not supported on multi-store")]
    Unsupported(&'static str),

    #[error("no backing stores configured")]
    NoBackends,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Internal(err.to_string())
    }
}
