use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid store key: {key:?}")]
    InvalidKey { key: String },

    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
