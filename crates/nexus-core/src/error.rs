//! Error types for the Nexus dashboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NexusError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Tenant context missing or invalid")]
    TenantContext,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NexusError {
    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

pub type NexusResult<T> = Result<T, NexusError>;
