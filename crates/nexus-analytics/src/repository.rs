//! In-memory implementations of the core repository traits over the
//! generated [`MockDataset`](crate::mock::MockDataset).

use std::collections::HashMap;
use std::sync::Arc;

use nexus_core::error::{NexusError, NexusResult};
use nexus_core::models::agent::AgentStat;
use nexus_core::models::call_log::{CallFilters, CallLog};
use nexus_core::repository::{AgentRepository, CallLogRepository, PaginatedResult, Pagination};
use tracing::debug;

use crate::query;

/// Call-log repository backed by the shared generated array.
#[derive(Debug, Clone)]
pub struct InMemoryCallLogRepository {
    calls: Arc<Vec<CallLog>>,
}

impl InMemoryCallLogRepository {
    pub fn new(calls: Arc<Vec<CallLog>>) -> Self {
        Self { calls }
    }
}

impl CallLogRepository for InMemoryCallLogRepository {
    async fn get_by_id(&self, tenant_id: &str, id: &str) -> NexusResult<CallLog> {
        query::find_call(&self.calls, tenant_id, id)
            .cloned()
            .ok_or_else(|| NexusError::not_found("call_log", id))
    }

    async fn search(
        &self,
        tenant_id: &str,
        filters: &CallFilters,
        pagination: Pagination,
    ) -> NexusResult<PaginatedResult<CallLog>> {
        if pagination.page_size == 0 {
            return Err(NexusError::Validation {
                message: "page size must be positive".into(),
            });
        }

        let result = query::query_calls(&self.calls, tenant_id, filters, pagination);
        debug!(
            tenant_id,
            page = result.page,
            visible = result.items.len(),
            total = result.total,
            "Queried call history"
        );
        Ok(result)
    }

    async fn brands(&self, tenant_id: &str) -> NexusResult<Vec<String>> {
        Ok(query::brands_for_tenant(&self.calls, tenant_id))
    }
}

/// Agent repository over the per-tenant seed table.
#[derive(Debug, Clone)]
pub struct InMemoryAgentRepository {
    agents: Arc<HashMap<String, Vec<AgentStat>>>,
}

impl InMemoryAgentRepository {
    pub fn new(agents: Arc<HashMap<String, Vec<AgentStat>>>) -> Self {
        Self { agents }
    }
}

impl AgentRepository for InMemoryAgentRepository {
    async fn list(&self, tenant_id: &str) -> NexusResult<Vec<AgentStat>> {
        Ok(self.agents.get(tenant_id).cloned().unwrap_or_default())
    }
}
