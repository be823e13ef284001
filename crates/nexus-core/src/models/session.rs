//! Session domain model.

use serde::{Deserialize, Serialize};

use super::user::User;

/// The process-wide authentication state.
///
/// `is_loading` is true while startup restoration or an auth call is
/// in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_loading: bool,
}

impl Session {
    /// The state before persisted data has been read.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            token: Some(token),
            is_loading: false,
        }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }
}

/// Successful response of a login or registration call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
