//! Tenant domain model.
//!
//! A tenant is an isolated organization or workspace. Call logs and
//! agents are partitioned by tenant id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing plan; also drives the dashboard's volume multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Plan {
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    /// Relative call volume of a tenant on this plan.
    pub fn volume_multiplier(self) -> u64 {
        match self {
            Plan::Enterprise => 10,
            Plan::Pro => 5,
            Plan::Free => 1,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Stable identifier (e.g. `tenant_a`).
    pub id: String,
    /// Human-readable organization name.
    pub name: String,
    pub plan: Plan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Tenant {
    /// Default support address shown on the settings page.
    ///
    /// Derived from the tenant id with its first underscore removed,
    /// e.g. `tenant_a` → `support@tenanta.com`.
    pub fn support_email(&self) -> String {
        format!("support@{}.com", self.id.replacen('_', "", 1))
    }
}

/// Fields required to create a new tenant.
#[derive(Debug, Clone)]
pub struct CreateTenant {
    pub name: String,
    pub plan: Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_multipliers() {
        assert_eq!(Plan::Enterprise.volume_multiplier(), 10);
        assert_eq!(Plan::Pro.volume_multiplier(), 5);
        assert_eq!(Plan::Free.volume_multiplier(), 1);
    }

    #[test]
    fn support_email_strips_first_underscore_only() {
        let tenant = Tenant {
            id: "tenant_new_1".into(),
            name: "New".into(),
            plan: Plan::Free,
            logo_url: None,
        };
        assert_eq!(tenant.support_email(), "support@tenantnew_1.com");
    }
}
