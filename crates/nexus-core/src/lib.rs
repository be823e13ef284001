//! Nexus Core — domain models, error types, repository traits, and the
//! access and routing rules shared by every Nexus crate.

pub mod access;
pub mod error;
pub mod models;
pub mod repository;
pub mod route;

pub use access::{Resource, can_access};
pub use error::{NexusError, NexusResult};
