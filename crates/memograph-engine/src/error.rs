use thiserror::Error;
use uuid::Uuid;

use memograph_persist::StoreError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Thread not found: {0}")]
    ThreadNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Provider error: {0}")]
    Provider(#[source] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
