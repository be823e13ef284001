//! Call-history query engine: tenant partition, predicate filtering,
//! and page windowing over the generated call logs.
//!
//! Filtering never re-sorts; results keep the newest-first order the
//! records were generated in.

use nexus_core::models::call_log::{CallFilters, CallLog};
use nexus_core::repository::{PaginatedResult, Pagination};

/// Whether `log` is visible to `tenant_id` under `filters`.
///
/// The tenant check is a hard partition; the remaining predicates are
/// ANDed together.
pub fn matches(log: &CallLog, tenant_id: &str, filters: &CallFilters) -> bool {
    if log.tenant_id != tenant_id {
        return false;
    }
    if !matches_search(log, &filters.search) {
        return false;
    }
    if filters.status.is_some_and(|status| log.status != status) {
        return false;
    }
    if filters.brand.as_ref().is_some_and(|brand| &log.brand != brand) {
        return false;
    }

    let day = log.start_date();
    if filters.date_start.is_some_and(|start| day < start) {
        return false;
    }
    if filters.date_end.is_some_and(|end| day > end) {
        return false;
    }
    true
}

/// Case-insensitive substring match against caller number, agent
/// name, id, and outcome. An empty term matches everything.
pub fn matches_search(log: &CallLog, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [
        &log.caller_number,
        &log.agent_name,
        &log.id,
        &log.outcome,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

/// All records of `tenant_id` that pass `filters`, in input order.
pub fn filter_calls<'a>(
    records: &'a [CallLog],
    tenant_id: &str,
    filters: &CallFilters,
) -> Vec<&'a CallLog> {
    records
        .iter()
        .filter(|log| matches(log, tenant_id, filters))
        .collect()
}

/// Slice one page out of `items`. Pages past the end are empty; the
/// page number is not clamped.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> PaginatedResult<T> {
    let start = pagination.offset().min(items.len());
    let end = start.saturating_add(pagination.page_size).min(items.len());

    PaginatedResult {
        items: items[start..end].to_vec(),
        total: items.len(),
        page: pagination.page,
        page_size: pagination.page_size,
    }
}

/// Filter then paginate: the visible history page and the number of
/// matching records.
pub fn query_calls(
    records: &[CallLog],
    tenant_id: &str,
    filters: &CallFilters,
    pagination: Pagination,
) -> PaginatedResult<CallLog> {
    let matching = filter_calls(records, tenant_id, filters);
    let page = paginate(&matching, pagination);
    PaginatedResult {
        items: page.items.into_iter().cloned().collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    }
}

/// Distinct brands of the tenant's calls, in first-seen order.
pub fn brands_for_tenant(records: &[CallLog], tenant_id: &str) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for log in records.iter().filter(|log| log.tenant_id == tenant_id) {
        if !brands.contains(&log.brand) {
            brands.push(log.brand.clone());
        }
    }
    brands
}

/// Look up one call of `tenant_id` by id.
pub fn find_call<'a>(records: &'a [CallLog], tenant_id: &str, id: &str) -> Option<&'a CallLog> {
    records
        .iter()
        .find(|log| log.tenant_id == tenant_id && log.id == id)
}

/// Bring a requested page into `1..=page_count` (page 1 when there
/// are no pages).
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

pub fn next_page(page: usize, page_count: usize) -> usize {
    clamp_page(page.saturating_add(1), page_count)
}

pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}
