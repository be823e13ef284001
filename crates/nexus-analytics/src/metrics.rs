//! Dashboard metric aggregator.
//!
//! The numbers are synthetic: volume is scaled from the tenant's plan
//! and the length of the time range, then jittered. Series points are
//! jittered independently, so they do not add up to the headline
//! totals. Callers must not treat the series as a breakdown of the
//! totals.

use std::str::FromStr;

use chrono::{Days, NaiveDate};
use nexus_core::error::NexusError;
use nexus_core::models::agent::AgentStat;
use nexus_core::models::tenant::Tenant;
use rand::Rng;
use serde::Serialize;

use crate::config::AnalyticsConfig;

const HOUR_LABELS: [&str; 7] = ["8am", "10am", "12pm", "2pm", "4pm", "6pm", "8pm"];
const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEK_LABELS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Custom ranges longer than this are sampled instead of listed daily.
const MAX_DAILY_POINTS: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Today,
    Weekly,
    Monthly,
    Yearly,
    /// Inclusive of both endpoints.
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimeRange {
    /// The custom range the dashboard offers by default: the last
    /// seven days up to `today`.
    pub fn default_custom(today: NaiveDate) -> Self {
        Self::custom(None, None, today)
    }

    /// A custom range, filling a missing bound from the default range.
    pub fn custom(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Self {
        TimeRange::Custom {
            start: start.unwrap_or(today - Days::new(7)),
            end: end.unwrap_or(today),
        }
    }

    /// Days covered by the range, never less than one.
    pub fn day_span(&self) -> u64 {
        match self {
            TimeRange::Today => 1,
            TimeRange::Weekly => 7,
            TimeRange::Monthly => 30,
            TimeRange::Yearly => 365,
            TimeRange::Custom { start, end } => {
                (*end - *start).num_days().unsigned_abs() + 1
            }
        }
    }

    /// Chart labels, one per series point.
    pub fn labels(&self) -> Vec<String> {
        let fixed: &[&str] = match self {
            TimeRange::Today => &HOUR_LABELS,
            TimeRange::Weekly => &WEEKDAY_LABELS,
            TimeRange::Monthly => &WEEK_LABELS,
            TimeRange::Yearly => &MONTH_LABELS,
            TimeRange::Custom { start, .. } => return custom_labels(*start, self.day_span()),
        };
        fixed.iter().map(|label| label.to_string()).collect()
    }
}

fn custom_labels(start: NaiveDate, days: u64) -> Vec<String> {
    let day = |offset: u64| start.checked_add_days(Days::new(offset));

    if days <= MAX_DAILY_POINTS {
        (0..days)
            .filter_map(day)
            .map(|d| d.format("%a").to_string())
            .collect()
    } else {
        let step = days.div_ceil(MAX_DAILY_POINTS) as usize;
        (0..days)
            .step_by(step)
            .filter_map(day)
            .map(|d| d.format("%b %-d").to_string())
            .collect()
    }
}

impl FromStr for TimeRange {
    type Err = NexusError;

    /// Parses the preset ranges; custom ranges are built directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "today" => Ok(TimeRange::Today),
            "weekly" => Ok(TimeRange::Weekly),
            "monthly" => Ok(TimeRange::Monthly),
            "yearly" => Ok(TimeRange::Yearly),
            other => Err(NexusError::Validation {
                message: format!("unknown time range: {other}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub calls: u64,
    pub success: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSlice {
    pub name: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_calls: u64,
    pub connected_calls: u64,
    pub missed_calls: u64,
    /// Rendered as `"{m}m {ss}s"`.
    pub avg_duration: String,
    pub time_series: Vec<SeriesPoint>,
    /// Connected vs missed/failed.
    pub breakdown: Vec<BreakdownSlice>,
    pub active_agents: usize,
}

/// Synthesizes dashboard metrics for a tenant and time range.
#[derive(Debug, Clone)]
pub struct MetricAggregator {
    base_daily_volume: u64,
    missed_rate: f64,
}

impl MetricAggregator {
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            base_daily_volume: config.base_daily_volume,
            missed_rate: config.missed_rate,
        }
    }

    /// Compute the dashboard for `tenant` over `range`. Nothing is
    /// cached; every call draws fresh numbers from `rng`.
    pub fn aggregate<R: Rng + ?Sized>(
        &self,
        tenant: &Tenant,
        range: &TimeRange,
        agents: &[AgentStat],
        rng: &mut R,
    ) -> DashboardMetrics {
        let volume = self.base_daily_volume * tenant.plan.volume_multiplier() * range.day_span();
        let total_calls = (volume as f64 * rng.random_range(0.8..1.3)).floor() as u64;
        let missed_calls = (total_calls as f64 * self.missed_rate).floor() as u64;
        let connected_calls = total_calls - missed_calls;

        let avg_minutes = 2.0 + rng.random::<f64>() * 3.0;
        let avg_duration = format!(
            "{}m {:02}s",
            avg_minutes.floor() as u64,
            (avg_minutes.fract() * 60.0).floor() as u64
        );

        let labels = range.labels();
        let points = labels.len().max(1) as f64;
        let time_series = labels
            .into_iter()
            .map(|label| SeriesPoint {
                label,
                calls: jittered_share(total_calls, points, rng),
                success: jittered_share(connected_calls, points, rng),
                failed: jittered_share(missed_calls, points, rng),
            })
            .collect();

        DashboardMetrics {
            total_calls,
            connected_calls,
            missed_calls,
            avg_duration,
            time_series,
            breakdown: vec![
                BreakdownSlice {
                    name: "Connected",
                    value: connected_calls,
                },
                BreakdownSlice {
                    name: "Missed/Failed",
                    value: missed_calls,
                },
            ],
            active_agents: agents.iter().filter(|a| a.is_active()).count(),
        }
    }
}

impl Default for MetricAggregator {
    fn default() -> Self {
        Self::new(&AnalyticsConfig::default())
    }
}

fn jittered_share<R: Rng + ?Sized>(total: u64, points: f64, rng: &mut R) -> u64 {
    (total as f64 / points * rng.random_range(0.7..1.3)).floor() as u64
}
