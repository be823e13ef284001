//! Authentication service. Drives session-store transitions around
//! calls to the auth collaborator.

use nexus_core::error::{NexusError, NexusResult};
use nexus_core::models::tenant::Tenant;
use nexus_core::models::user::User;
use nexus_state::{KeyValueStore, SessionStore, TenantRegistry};
use tracing::{info, warn};

use crate::backend::AuthBackend;

/// Input for the signup flow.
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub email: String,
    pub name: String,
    /// Name of the workspace tenant created for the new account.
    pub workspace_name: String,
}

/// Authentication service.
///
/// Stateless itself: the session store and tenant registry are passed
/// in by the caller. Every flow raises the loading flag for its
/// duration and clears it again on both success and failure.
pub struct AuthService<B: AuthBackend> {
    backend: B,
}

impl<B: AuthBackend> AuthService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Rebuild the session from local storage at startup.
    pub fn restore<S: KeyValueStore>(&self, sessions: &mut SessionStore<S>) -> bool {
        sessions.restore().is_authenticated
    }

    /// Sign in by email and persist the resulting session.
    pub async fn login<S: KeyValueStore>(
        &self,
        sessions: &mut SessionStore<S>,
        email: &str,
    ) -> NexusResult<User> {
        sessions.begin_loading();
        let response = match self.backend.login(email).await {
            Ok(response) => response,
            Err(e) => {
                sessions.end_loading();
                warn!(error = %e, "Login failed");
                return Err(e.into());
            }
        };

        let user = response.user.clone();
        if let Err(e) = sessions.establish(response.user, response.token) {
            sessions.end_loading();
            return Err(e);
        }
        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Register an account, sign it in, and create its workspace
    /// tenant as the current one.
    ///
    /// A blank workspace name is rejected before the collaborator is
    /// called. If the workspace still cannot be created, the new
    /// session is cleared again.
    pub async fn sign_up<S: KeyValueStore>(
        &self,
        sessions: &mut SessionStore<S>,
        tenants: &mut TenantRegistry<S>,
        input: SignUpInput,
    ) -> NexusResult<(User, Tenant)> {
        if input.workspace_name.trim().is_empty() {
            warn!("Registration rejected: blank workspace name");
            return Err(NexusError::Validation {
                message: "workspace name must not be empty".into(),
            });
        }

        sessions.begin_loading();
        let response = match self.backend.register(&input.email, &input.name).await {
            Ok(response) => response,
            Err(e) => {
                sessions.end_loading();
                warn!(error = %e, "Registration failed");
                return Err(e.into());
            }
        };

        let user = response.user.clone();
        if let Err(e) = sessions.establish(response.user, response.token) {
            sessions.end_loading();
            return Err(e);
        }
        info!(user_id = %user.id, "User registered");

        match tenants.create_workspace(&input.workspace_name) {
            Ok(tenant) => Ok((user, tenant.clone())),
            Err(e) => {
                warn!(error = %e, "Workspace creation failed, signing out");
                sessions.clear();
                Err(e)
            }
        }
    }

    /// Ask the collaborator to send a password reset link. The session
    /// is left untouched.
    pub async fn forgot_password<S: KeyValueStore>(
        &self,
        sessions: &mut SessionStore<S>,
        email: &str,
    ) -> NexusResult<()> {
        sessions.begin_loading();
        let result = self.backend.request_password_reset(email).await;
        sessions.end_loading();
        result.map_err(|e| {
            warn!(error = %e, "Password reset request failed");
            e.into()
        })
    }

    /// Check the persisted token with the collaborator, logging out
    /// when it no longer resolves to a user.
    pub async fn revalidate<S: KeyValueStore>(
        &self,
        sessions: &mut SessionStore<S>,
    ) -> Option<User> {
        let token = sessions.token()?.to_string();
        match self.backend.validate_token(&token).await {
            Some(user) => Some(user),
            None => {
                info!("Persisted token rejected, logging out");
                sessions.clear();
                None
            }
        }
    }

    pub fn logout<S: KeyValueStore>(&self, sessions: &mut SessionStore<S>) {
        if let Some(user) = sessions.user() {
            info!(user_id = %user.id, "User logged out");
        }
        sessions.clear();
    }
}
