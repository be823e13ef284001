//! Nexus State — local key-value persistence and the injected state
//! holders built on it.
//!
//! This crate provides:
//! - Key-value storage ([`KeyValueStore`], [`MemoryStore`], [`FileStore`])
//! - The session store ([`SessionStore`])
//! - The tenant registry ([`TenantRegistry`])
//! - UI preferences ([`Preferences`])
//! - Accounts registered through signup ([`UserDirectory`])

mod directory;
mod error;
pub mod keys;
mod kv;
mod preferences;
mod session;
mod tenant;

pub use directory::UserDirectory;
pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use preferences::Preferences;
pub use session::SessionStore;
pub use tenant::TenantRegistry;
