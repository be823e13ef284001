//! Analytics configuration.

/// Sizes and rates used by the mock data and the dashboard.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Number of call logs generated at startup (default: 50).
    pub call_log_count: usize,
    /// Call logs shown per history page (default: 10).
    pub page_size: usize,
    /// Calls start at most this many milliseconds before "now"
    /// (default: 1_000_000_000, about 11.5 days).
    pub history_window_ms: i64,
    /// Daily calls of a Free tenant before jitter (default: 150).
    pub base_daily_volume: u64,
    /// Share of calls counted as missed (default: 0.15).
    pub missed_rate: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            call_log_count: 50,
            page_size: 10,
            history_window_ms: 1_000_000_000,
            base_daily_volume: 150,
            missed_rate: 0.15,
        }
    }
}
