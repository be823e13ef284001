//! The session store: the single authenticated identity of the
//! process, mirrored into local storage.

use nexus_core::error::{NexusError, NexusResult};
use nexus_core::models::session::Session;
use nexus_core::models::user::User;
use tracing::{info, warn};

use crate::keys;
use crate::kv::KeyValueStore;

/// Holds the current [`Session`] and keeps `session_token` /
/// `session_user` in sync with it.
///
/// Starts in the loading state; call [`SessionStore::restore`] once at
/// startup.
#[derive(Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::loading(),
        }
    }

    /// Rebuild the session from persisted state.
    ///
    /// Both keys must be present and the user must deserialize;
    /// anything else ends logged out. Corrupt data is cleared without
    /// surfacing an error.
    pub fn restore(&mut self) -> &Session {
        let token = self.store.get(keys::SESSION_TOKEN).ok().flatten();
        let user_json = self.store.get(keys::SESSION_USER).ok().flatten();

        self.session = match (token, user_json) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<User>(&user_json) {
                Ok(user) => {
                    info!(user_id = %user.id, "Restored persisted session");
                    Session::authenticated(user, token)
                }
                Err(e) => {
                    warn!(error = %e, "Persisted session user is corrupt, logging out");
                    self.remove_persisted();
                    Session::logged_out()
                }
            },
            _ => Session::logged_out(),
        };

        &self.session
    }

    /// Record a successful login or registration.
    pub fn establish(&mut self, user: User, token: String) -> NexusResult<()> {
        let user_json =
            serde_json::to_string(&user).map_err(|e| NexusError::Serialization(e.to_string()))?;
        self.store.set(keys::SESSION_TOKEN, &token)?;
        self.store.set(keys::SESSION_USER, &user_json)?;
        self.session = Session::authenticated(user, token);
        Ok(())
    }

    /// Log out: forget the identity and drop the persisted keys.
    pub fn clear(&mut self) {
        self.remove_persisted();
        self.session = Session::logged_out();
    }

    pub fn begin_loading(&mut self) {
        self.session.is_loading = true;
    }

    pub fn end_loading(&mut self) {
        self.session.is_loading = false;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    fn remove_persisted(&self) {
        for key in [keys::SESSION_TOKEN, keys::SESSION_USER] {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "Failed to clear persisted session key");
            }
        }
    }
}
