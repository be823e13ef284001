//! Storage-specific error types and conversions.

use nexus_core::error::NexusError;

/// Local storage error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt state file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

impl From<StoreError> for NexusError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corrupt(e) => NexusError::Serialization(e.to_string()),
            other => NexusError::Storage(other.to_string()),
        }
    }
}
