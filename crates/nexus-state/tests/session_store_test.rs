//! Integration tests for the persisted session store.

use nexus_core::models::user::{User, UserRole};
use nexus_state::{FileStore, KeyValueStore, MemoryStore, SessionStore, keys};

fn alice() -> User {
    User {
        id: "u_1".into(),
        email: "admin@nexus.ai".into(),
        name: "Alice Administrator".into(),
        role: UserRole::Admin,
        avatar_url: Some("https://picsum.photos/100/100".into()),
    }
}

#[test]
fn starts_loading_until_restored() {
    let mut sessions = SessionStore::new(MemoryStore::new());
    assert!(sessions.is_loading());

    let session = sessions.restore();
    assert!(!session.is_loading);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

#[test]
fn establish_persists_and_restores() {
    let store = MemoryStore::new();
    let mut sessions = SessionStore::new(store.clone());
    sessions.restore();
    sessions.establish(alice(), "tok-1".into()).unwrap();

    assert!(sessions.is_authenticated());
    assert_eq!(
        store.get(keys::SESSION_TOKEN).unwrap().as_deref(),
        Some("tok-1")
    );

    // A fresh store over the same storage picks the session back up.
    let mut reloaded = SessionStore::new(store);
    let session = reloaded.restore();
    assert!(session.is_authenticated);
    assert_eq!(session.user.as_ref().unwrap(), &alice());
    assert_eq!(session.token.as_deref(), Some("tok-1"));
}

#[test]
fn corrupt_user_restores_logged_out_and_clears_keys() {
    let store = MemoryStore::new();
    store.set(keys::SESSION_TOKEN, "tok-1").unwrap();
    store.set(keys::SESSION_USER, "{not json").unwrap();

    let mut sessions = SessionStore::new(store.clone());
    let session = sessions.restore();
    assert!(!session.is_authenticated);
    assert!(!session.is_loading);
    assert_eq!(store.get(keys::SESSION_TOKEN).unwrap(), None);
    assert_eq!(store.get(keys::SESSION_USER).unwrap(), None);
}

#[test]
fn token_without_user_is_logged_out() {
    let store = MemoryStore::new();
    store.set(keys::SESSION_TOKEN, "tok-1").unwrap();

    let mut sessions = SessionStore::new(store);
    assert!(!sessions.restore().is_authenticated);
}

#[test]
fn clear_removes_persisted_keys() {
    let store = MemoryStore::new();
    let mut sessions = SessionStore::new(store.clone());
    sessions.establish(alice(), "tok-1".into()).unwrap();
    sessions.clear();

    assert!(!sessions.is_authenticated());
    assert!(sessions.user().is_none());
    assert_eq!(store.get(keys::SESSION_USER).unwrap(), None);
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut sessions = SessionStore::new(FileStore::open(&path));
    sessions.establish(alice(), "tok-file".into()).unwrap();

    let mut reopened = SessionStore::new(FileStore::open(&path));
    assert_eq!(reopened.restore().token.as_deref(), Some("tok-file"));
}

#[test]
fn corrupt_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = FileStore::open(&path);
    assert_eq!(store.get(keys::SESSION_TOKEN).unwrap(), None);

    let mut sessions = SessionStore::new(store);
    assert!(!sessions.restore().is_authenticated);
}
