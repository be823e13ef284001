//! Nexus Analytics — mock call data, the call-history query engine,
//! and the dashboard metric aggregator.

pub mod config;
pub mod metrics;
pub mod mock;
pub mod query;
pub mod repository;

pub use config::AnalyticsConfig;
pub use metrics::{DashboardMetrics, MetricAggregator, SeriesPoint, TimeRange};
pub use mock::MockDataset;
pub use repository::{InMemoryAgentRepository, InMemoryCallLogRepository};
