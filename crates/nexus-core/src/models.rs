//! Domain models for Nexus.
//!
//! Every record that belongs to an organization carries the owning
//! tenant id; tenants never see each other's data.

pub mod agent;
pub mod call_log;
pub mod session;
pub mod tenant;
pub mod user;

/// Render a duration in seconds the way the dashboard shows it:
/// `"{m}m {s}s"`, or `"0s"` when nothing was recorded.
pub fn format_duration(secs: u32) -> String {
    if secs == 0 {
        return "0s".into();
    }
    format!("{}m {}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_bare_seconds() {
        assert_eq!(format_duration(0), "0s");
    }

    #[test]
    fn durations_keep_minute_prefix() {
        assert_eq!(format_duration(150), "2m 30s");
        assert_eq!(format_duration(45), "0m 45s");
        assert_eq!(format_duration(600), "10m 0s");
    }
}
