//! Plain-text rendering of each view.

use nexus_analytics::DashboardMetrics;
use nexus_core::models::agent::AgentStat;
use nexus_core::models::call_log::{CallFilters, CallLog};
use nexus_core::models::tenant::Tenant;
use nexus_core::models::user::User;
use nexus_core::repository::PaginatedResult;

pub fn access_denied() {
    println!("Access Denied");
    println!("You do not have the necessary permissions to view the settings for this tenant.");
}

pub fn user(user: &User, tenant: &Tenant, sidebar_collapsed: bool) {
    println!("{} <{}> ({:?})", user.name, user.email, user.role);
    println!("Workspace: {} [{}] on the {} plan", tenant.name, tenant.id, tenant.plan);
    println!(
        "Sidebar: {}",
        if sidebar_collapsed { "collapsed" } else { "expanded" }
    );
}

pub fn tenants(tenants: &[Tenant], current: &Tenant) {
    for tenant in tenants {
        let marker = if tenant.id == current.id { "*" } else { " " };
        println!("{marker} {:<24} {:<12} {} Plan", tenant.id, tenant.name, tenant.plan);
    }
}

pub fn dashboard(tenant: &Tenant, metrics: &DashboardMetrics) {
    println!("Overview for {}", tenant.name);
    println!("  Total calls:     {}", metrics.total_calls);
    println!("  Connected:       {}", metrics.connected_calls);
    println!("  Missed/Failed:   {}", metrics.missed_calls);
    println!("  Avg duration:    {}", metrics.avg_duration);
    println!("  Active agents:   {}", metrics.active_agents);
    println!();
    println!("  {:<10} {:>8} {:>8} {:>8}", "", "calls", "success", "failed");
    for point in &metrics.time_series {
        println!(
            "  {:<10} {:>8} {:>8} {:>8}",
            point.label, point.calls, point.success, point.failed
        );
    }
}

pub fn history(
    tenant: &Tenant,
    filters: &CallFilters,
    result: &PaginatedResult<CallLog>,
    brands: &[String],
) {
    println!("Call history for {}", tenant.name);
    if !brands.is_empty() {
        println!("Brands: {}", brands.join(", "));
    }

    if result.items.is_empty() {
        if filters.is_identity() {
            println!("No calls recorded yet.");
        } else {
            println!("No calls match these filters.");
        }
        return;
    }

    for call in &result.items {
        println!(
            "{:<10} {}  {:<18} {:<22} {:<9} {:>7}  {}",
            call.id,
            call.start_time.format("%Y-%m-%d %H:%M"),
            call.caller_number,
            call.agent_name,
            call.status,
            call.duration(),
            call.outcome
        );
    }
    if let Some((first, last)) = result.window() {
        println!(
            "Showing {first} to {last} of {} results (page {} of {})",
            result.total,
            result.page,
            result.page_count()
        );
    }
}

pub fn call(call: &CallLog) {
    println!("{} ({})", call.id, call.status);
    println!("  Brand:     {}", call.brand);
    println!("  Caller:    {}", call.caller_number);
    println!("  Agent:     {}", call.agent_name);
    println!("  Started:   {}", call.start_time.to_rfc3339());
    println!("  Duration:  {}", call.duration());
    println!("  Sentiment: {:?}", call.sentiment);
    println!("  Outcome:   {}", call.outcome);
    if let Some(url) = &call.recording_url {
        println!("  Recording: {url}");
    }
    if let Some(summary) = &call.summary {
        println!();
        println!("{summary}");
    }
    if let Some(transcript) = &call.transcript {
        println!();
        println!("{transcript}");
    }
}

pub fn agents(tenant: &Tenant, agents: &[AgentStat]) {
    println!("Voice agents for {}", tenant.name);
    if agents.is_empty() {
        println!("No agents deployed.");
    }
    for agent in agents {
        println!(
            "{:<6} {:<22} {:<8} {:>6} calls  avg {}",
            agent.id,
            agent.name,
            format!("{:?}", agent.status).to_lowercase(),
            agent.calls_handled,
            agent.avg_duration()
        );
    }
}

pub fn settings(tenant: &Tenant) {
    println!("General Configuration");
    println!("  Tenant name:   {}", tenant.name);
    println!("  Support email: {}", tenant.support_email());
    println!("  Plan:          {}", tenant.plan);
}
