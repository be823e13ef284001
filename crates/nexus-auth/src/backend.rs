//! The auth collaborator: the identity provider the dashboard talks
//! to, and its in-process mock.

use std::sync::RwLock;

use nexus_core::models::session::AuthResponse;
use nexus_core::models::user::{User, UserRole};
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token;

/// Remote identity provider.
///
/// Every call resolves exactly once and cannot be cancelled.
pub trait AuthBackend: Send + Sync {
    /// Sign in by email. Unknown addresses fail with
    /// [`AuthError::InvalidCredentials`].
    fn login(&self, email: &str) -> impl Future<Output = Result<AuthResponse, AuthError>> + Send;
    /// Create an account; the creator of a workspace is its admin.
    fn register(
        &self,
        email: &str,
        name: &str,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>> + Send;
    /// Send a reset link. Succeeds for any well-formed address so that
    /// callers cannot probe which accounts exist.
    fn request_password_reset(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;
    /// Resolve a token to its user, `None` when it is not valid.
    fn validate_token(&self, token: &str) -> impl Future<Output = Option<User>> + Send;
}

/// The built-in accounts of the mock identity provider.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "u_1".into(),
            email: "admin@nexus.ai".into(),
            name: "Alice Administrator".into(),
            role: UserRole::Admin,
            avatar_url: Some("https://picsum.photos/100/100".into()),
        },
        User {
            id: "u_2".into(),
            email: "viewer@nexus.ai".into(),
            name: "Bob Viewer".into(),
            role: UserRole::Viewer,
            avatar_url: Some("https://picsum.photos/101/101".into()),
        },
    ]
}

/// In-process identity provider with artificial latency.
///
/// Registered accounts join the directory, so they can sign in again
/// later in the same process. Callers that outlive the process seed it
/// with [`MockAuthBackend::with_users`]. Lookups return the first
/// account with a matching email.
pub struct MockAuthBackend {
    users: RwLock<Vec<User>>,
    config: AuthConfig,
}

impl MockAuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_users(seed_users(), config)
    }

    pub fn with_users(users: Vec<User>, config: AuthConfig) -> Self {
        Self {
            users: RwLock::new(users),
            config,
        }
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::OperationFailed("user directory poisoned".into()))?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    fn find_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.read().ok()?;
        users.iter().find(|u| u.id == id).cloned()
    }

    fn respond(&self, user: User) -> Result<AuthResponse, AuthError> {
        let token = token::issue_session_token(&user.id, &self.config)?;
        Ok(AuthResponse { user, token })
    }
}

impl AuthBackend for MockAuthBackend {
    async fn login(&self, email: &str) -> Result<AuthResponse, AuthError> {
        sleep(self.config.login_delay).await;

        let user = self
            .find_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;
        self.respond(user)
    }

    async fn register(&self, email: &str, name: &str) -> Result<AuthResponse, AuthError> {
        sleep(self.config.register_delay).await;

        let user = User {
            id: format!("u_{}", Uuid::new_v4().simple()),
            email: email.to_string(),
            name: name.to_string(),
            role: UserRole::Admin,
            avatar_url: Some(format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                name.replace(' ', "+")
            )),
        };

        self.users
            .write()
            .map_err(|_| AuthError::OperationFailed("user directory poisoned".into()))?
            .push(user.clone());
        debug!(user_id = %user.id, "Registered user");

        self.respond(user)
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        sleep(self.config.password_reset_delay).await;

        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        debug!("Password reset requested");
        Ok(())
    }

    async fn validate_token(&self, token: &str) -> Option<User> {
        sleep(self.config.validate_delay).await;

        if token.is_empty() {
            return None;
        }
        let claims = token::decode_session_token(token, &self.config).ok()?;
        self.find_by_id(&claims.sub)
    }
}
