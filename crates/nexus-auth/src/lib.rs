//! Nexus Auth — mocked identity provider, signed session tokens, and
//! the login / signup / logout orchestration over the session store.

pub mod backend;
pub mod config;
pub mod error;
pub mod service;
pub mod token;

pub use backend::{AuthBackend, MockAuthBackend};
pub use config::AuthConfig;
pub use error::{AuthAction, AuthError};
pub use service::{AuthService, SignUpInput};
pub use token::SessionTokenClaims;
