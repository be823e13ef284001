//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Every read is tenant-scoped:
//! callers pass the current tenant id and only ever see that tenant's
//! records.

use crate::error::NexusResult;
use crate::models::{
    agent::AgentStat,
    call_log::{CallFilters, CallLog},
};

/// Page-based pagination parameters. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    /// Number of items matching the query across all pages.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> PaginatedResult<T> {
    /// `ceil(total / page_size)`; zero when nothing matched.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// 1-based inclusive range of the items on this page, `None` when
    /// the page is empty.
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page.saturating_sub(1) * self.page_size) + 1;
        Some((first, first + self.items.len() - 1))
    }
}

pub trait CallLogRepository: Send + Sync {
    fn get_by_id(
        &self,
        tenant_id: &str,
        id: &str,
    ) -> impl Future<Output = NexusResult<CallLog>> + Send;
    fn search(
        &self,
        tenant_id: &str,
        filters: &CallFilters,
        pagination: Pagination,
    ) -> impl Future<Output = NexusResult<PaginatedResult<CallLog>>> + Send;
    /// Distinct brands seen in the tenant's calls, first-seen order.
    fn brands(&self, tenant_id: &str) -> impl Future<Output = NexusResult<Vec<String>>> + Send;
}

pub trait AgentRepository: Send + Sync {
    /// Agents deployed by a tenant. Unknown tenants have none.
    fn list(&self, tenant_id: &str) -> impl Future<Output = NexusResult<Vec<AgentStat>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(total: usize, page: usize, items: usize) -> PaginatedResult<u8> {
        PaginatedResult {
            items: vec![0; items],
            total,
            page,
            page_size: 10,
        }
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(result(0, 1, 0).page_count(), 0);
        assert_eq!(result(10, 1, 10).page_count(), 1);
        assert_eq!(result(11, 1, 10).page_count(), 2);
    }

    #[test]
    fn window_reports_item_range() {
        assert_eq!(result(23, 3, 3).window(), Some((21, 23)));
        assert_eq!(result(23, 4, 0).window(), None);
    }
}
