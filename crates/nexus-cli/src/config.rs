//! Runtime configuration assembled from the environment and flags.

use std::path::PathBuf;

use nexus_analytics::AnalyticsConfig;
use nexus_auth::AuthConfig;

/// Default location of the persisted local state.
pub const DEFAULT_STATE_PATH: &str = ".nexus/state.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub state_path: PathBuf,
    pub auth: AuthConfig,
    pub analytics: AnalyticsConfig,
    /// Fixed RNG seed for reproducible mock data and metrics.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Build the configuration.
    ///
    /// `NEXUS_JWT_SECRET` overrides the token secret and a truthy
    /// `NEXUS_FAST_AUTH` removes the artificial auth latency.
    pub fn load(state_path: PathBuf, seed: Option<u64>) -> Self {
        let mut auth = AuthConfig::default();
        if let Some(secret) = std::env::var("NEXUS_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
        {
            auth.jwt_secret = secret;
        }
        if env_flag("NEXUS_FAST_AUTH") {
            auth = auth.without_delays();
        }

        Self {
            state_path,
            auth,
            analytics: AnalyticsConfig::default(),
            seed,
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
