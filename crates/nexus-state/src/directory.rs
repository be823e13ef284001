//! Accounts registered through signup, kept so they outlive the
//! process that created them.

use nexus_core::error::{NexusError, NexusResult};
use nexus_core::models::user::User;
use tracing::{debug, warn};

use crate::keys;
use crate::kv::KeyValueStore;

/// Registered users persisted under `registered_users` as a JSON array.
#[derive(Debug, Clone)]
pub struct UserDirectory<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UserDirectory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All persisted registrations, oldest first. A missing or corrupt
    /// value reads as empty.
    pub fn registered(&self) -> Vec<User> {
        let Some(raw) = self.store.get(keys::REGISTERED_USERS).ok().flatten() else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Discarding corrupt registered user list");
            Vec::new()
        })
    }

    /// Append `user`, replacing an earlier entry with the same id.
    pub fn record(&self, user: &User) -> NexusResult<()> {
        let mut users = self.registered();
        users.retain(|u| u.id != user.id);
        users.push(user.clone());

        let raw =
            serde_json::to_string(&users).map_err(|e| NexusError::Serialization(e.to_string()))?;
        self.store.set(keys::REGISTERED_USERS, &raw)?;
        debug!(user_id = %user.id, "Recorded registered user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nexus_core::models::user::UserRole;

    use super::*;
    use crate::kv::MemoryStore;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            email: format!("{id}@example.com"),
            name: name.into(),
            role: UserRole::Admin,
            avatar_url: None,
        }
    }

    #[test]
    fn empty_store_has_no_registrations() {
        let directory = UserDirectory::new(MemoryStore::new());
        assert!(directory.registered().is_empty());
    }

    #[test]
    fn record_appends_and_replaces_by_id() {
        let store = MemoryStore::new();
        let directory = UserDirectory::new(store.clone());
        directory.record(&user("u_x", "First")).unwrap();
        directory.record(&user("u_y", "Second")).unwrap();
        directory.record(&user("u_x", "Renamed")).unwrap();

        let users = UserDirectory::new(store).registered();
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Second", "Renamed"]);
    }

    #[test]
    fn corrupt_list_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(keys::REGISTERED_USERS, "[oops").unwrap();
        assert!(UserDirectory::new(store).registered().is_empty());
    }
}
