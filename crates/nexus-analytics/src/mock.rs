//! Mock data provider: seeded tenants and agents plus pseudo-random
//! call logs generated once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use nexus_core::models::agent::{AgentStat, AgentStatus};
use nexus_core::models::call_log::{CallLog, CallStatus, Sentiment};
use nexus_core::models::tenant::{Plan, Tenant};
use rand::Rng;
use tracing::debug;

use crate::config::AnalyticsConfig;

const OUTCOMES: [&str; 5] = [
    "Sale Closed",
    "Follow-up Scheduled",
    "Voicemail Left",
    "Information Provided",
    "Issue Resolved",
];

const AGENT_NAMES: [&str; 5] = [
    "Support Bot Alpha",
    "Sales Closer V1",
    "Onboarding Assistant",
    "Lead Gen X",
    "Meeting Scheduler",
];

pub const BRANDS: [&str; 4] = [
    "Sales Team A",
    "Support Center",
    "Marketing Campaign",
    "Retention",
];

/// Outcome recorded for calls that never connected.
pub const NO_OUTCOME: &str = "None";

const SUMMARY: &str = "Customer called inquiring about the latest pricing tier. Agent explained \
the Pro plan benefits. Customer seemed interested but wanted to check with their manager.";

const TRANSCRIPT: &str = "Agent: Hello, this is Nexus AI.\nCustomer: Hi, looking for pricing \
info.\nAgent: Sure, our Pro plan is $29/mo...";

/// The organizations every session starts with.
pub fn seed_tenants() -> Vec<Tenant> {
    vec![
        tenant("tenant_a", "Acme Corp", Plan::Enterprise),
        tenant("tenant_b", "Startup Inc", Plan::Pro),
        tenant("tenant_c", "Personal Sandbox", Plan::Free),
    ]
}

fn tenant(id: &str, name: &str, plan: Plan) -> Tenant {
    Tenant {
        id: id.into(),
        name: name.into(),
        plan,
        logo_url: None,
    }
}

/// Deployed agents per seeded tenant.
pub fn seed_agents() -> HashMap<String, Vec<AgentStat>> {
    let mut agents = HashMap::new();
    agents.insert(
        "tenant_a".to_string(),
        vec![
            agent("ag_1", "Support Bot Alpha", AgentStatus::Active, 1240, 150),
            agent("ag_2", "Sales Closer V1", AgentStatus::Idle, 450, 312),
            agent("ag_3", "Onboarding Assistant", AgentStatus::Active, 890, 225),
        ],
    );
    agents.insert(
        "tenant_b".to_string(),
        vec![
            agent("ag_4", "Lead Gen X", AgentStatus::Offline, 12, 70),
            agent("ag_5", "Meeting Scheduler", AgentStatus::Active, 56, 45),
        ],
    );
    agents.insert(
        "tenant_c".to_string(),
        vec![agent("ag_6", "My First Agent", AgentStatus::Idle, 0, 0)],
    );
    agents
}

fn agent(id: &str, name: &str, status: AgentStatus, calls: u64, avg_secs: u32) -> AgentStat {
    AgentStat {
        id: id.into(),
        name: name.into(),
        status,
        calls_handled: calls,
        avg_duration_secs: avg_secs,
    }
}

/// Tenant owning the `index`-th generated call.
pub fn tenant_for_index(index: usize) -> &'static str {
    if index % 3 == 0 {
        "tenant_b"
    } else if index % 5 == 0 {
        "tenant_c"
    } else {
        "tenant_a"
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generate `count` call logs, newest first.
///
/// `now` anchors the start times so callers can pin the clock.
pub fn generate_call_logs<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Vec<CallLog> {
    let mut logs: Vec<CallLog> = (0..config.call_log_count)
        .map(|i| {
            let completed = rng.random::<f64>() > 0.2;
            let status = if completed {
                CallStatus::Completed
            } else if rng.random::<f64>() > 0.5 {
                CallStatus::Missed
            } else {
                CallStatus::Failed
            };

            let brand = pick(rng, &BRANDS).to_string();
            let caller_number = format!(
                "+1 ({}) {}-{}",
                rng.random_range(100..1000),
                rng.random_range(100..1000),
                rng.random_range(1000..10000)
            );
            let agent_name = pick(rng, &AGENT_NAMES).to_string();
            let start_time =
                now - Duration::milliseconds(rng.random_range(0..config.history_window_ms.max(1)));
            let duration_secs = if completed {
                rng.random_range(0..10) * 60 + rng.random_range(0..60)
            } else {
                0
            };
            let sentiment = if rng.random::<f64>() > 0.6 {
                Sentiment::Positive
            } else if rng.random::<f64>() > 0.3 {
                Sentiment::Neutral
            } else {
                Sentiment::Negative
            };
            let outcome = if completed {
                pick(rng, &OUTCOMES).to_string()
            } else {
                NO_OUTCOME.to_string()
            };

            CallLog {
                id: format!("call_{}", 1000 + i),
                tenant_id: tenant_for_index(i).to_string(),
                brand,
                caller_number,
                agent_name,
                start_time,
                duration_secs,
                status,
                recording_url: completed.then(|| "#".to_string()),
                sentiment,
                outcome,
                summary: Some(SUMMARY.to_string()),
                transcript: Some(TRANSCRIPT.to_string()),
            }
        })
        .collect();

    logs.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    logs
}

/// Everything the dashboard reads, generated once per process.
///
/// Call logs sit behind an `Arc` so repositories and views share the
/// same array; switching tenant only changes which slice is visible.
#[derive(Debug, Clone)]
pub struct MockDataset {
    pub tenants: Vec<Tenant>,
    pub calls: Arc<Vec<CallLog>>,
    pub agents: Arc<HashMap<String, Vec<AgentStat>>>,
}

impl MockDataset {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        now: DateTime<Utc>,
        config: &AnalyticsConfig,
    ) -> Self {
        let calls = generate_call_logs(rng, now, config);
        debug!(calls = calls.len(), "Generated mock call logs");
        Self {
            tenants: seed_tenants(),
            calls: Arc::new(calls),
            agents: Arc::new(seed_agents()),
        }
    }

    /// Agents of `tenant_id`; empty for tenants without any.
    pub fn agents_for(&self, tenant_id: &str) -> &[AgentStat] {
        self.agents
            .get(tenant_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
