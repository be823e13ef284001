//! Authentication error types.

use nexus_core::error::NexusError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("operation failed: {0}")]
    OperationFailed(String),

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for NexusError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::TokenExpired | AuthError::TokenInvalid(_) => {
                NexusError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::InvalidEmail => NexusError::Validation {
                message: err.to_string(),
            },
            AuthError::OperationFailed(msg) | AuthError::Crypto(msg) => NexusError::Internal(msg),
        }
    }
}

/// User-initiated auth actions, each with its own static failure
/// message. The message never reveals which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
    PasswordReset,
}

impl AuthAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            AuthAction::SignIn => "Failed to sign in. Please check your credentials.",
            AuthAction::SignUp => "Failed to create account. Please try again.",
            AuthAction::PasswordReset => "Failed to send reset email. Please try again.",
        }
    }
}
