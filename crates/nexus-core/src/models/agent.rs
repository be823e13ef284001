//! Voice agent snapshot model.

use serde::{Deserialize, Serialize};

use super::format_duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
    Offline,
}

/// Status and call metrics of one deployed voice agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentStat {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub calls_handled: u64,
    /// Average call length in seconds.
    pub avg_duration_secs: u32,
}

impl AgentStat {
    pub fn avg_duration(&self) -> String {
        format_duration(self.avg_duration_secs)
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }
}
