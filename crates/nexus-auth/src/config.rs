//! Authentication configuration.

use std::time::Duration;

/// Configuration for the auth collaborator and token signing.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign session tokens.
    pub jwt_secret: String,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Session token lifetime in seconds (default: 86_400 = 1 day).
    pub token_lifetime_secs: u64,
    /// Artificial latency of a login call.
    pub login_delay: Duration,
    /// Artificial latency of a registration call.
    pub register_delay: Duration,
    /// Artificial latency of a password-reset call.
    pub password_reset_delay: Duration,
    /// Artificial latency of a token validation call.
    pub validate_delay: Duration,
}

impl AuthConfig {
    /// Same configuration with every artificial delay removed.
    pub fn without_delays(self) -> Self {
        Self {
            login_delay: Duration::ZERO,
            register_delay: Duration::ZERO,
            password_reset_delay: Duration::ZERO,
            validate_delay: Duration::ZERO,
            ..self
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "nexus-development-secret".into(),
            jwt_issuer: "nexus".into(),
            token_lifetime_secs: 86_400,
            login_delay: Duration::from_millis(800),
            register_delay: Duration::from_millis(1000),
            password_reset_delay: Duration::from_millis(1000),
            validate_delay: Duration::from_millis(400),
        }
    }
}
