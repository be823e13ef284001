//! The tenant registry: the organizations the session can reach and
//! the one currently selected.

use nexus_core::error::{NexusError, NexusResult};
use nexus_core::models::tenant::{CreateTenant, Plan, Tenant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::keys;
use crate::kv::KeyValueStore;

/// Tenant list plus the current selection, persisted under
/// `tenant_selection`. Tenants created at runtime are persisted under
/// `created_tenants` and reloaded after the seeds.
///
/// Always has a current tenant: construction requires at least one
/// seed and the first seed is the default.
#[derive(Debug)]
pub struct TenantRegistry<S: KeyValueStore> {
    store: S,
    tenants: Vec<Tenant>,
    seeded: usize,
    current: usize,
}

impl<S: KeyValueStore> TenantRegistry<S> {
    /// Build the registry from `seeds` plus previously created
    /// tenants, then re-apply the persisted selection. An unknown or
    /// missing id falls back to the first seed.
    pub fn load(store: S, seeds: Vec<Tenant>) -> NexusResult<Self> {
        if seeds.is_empty() {
            return Err(NexusError::TenantContext);
        }

        let mut registry = Self {
            store,
            seeded: seeds.len(),
            tenants: seeds,
            current: 0,
        };

        for tenant in registry.persisted_created() {
            if registry.position(&tenant.id).is_none() {
                registry.tenants.push(tenant);
            }
        }

        let saved = registry.store.get(keys::TENANT_SELECTION).ok().flatten();
        if let Some(saved) = saved {
            match registry.position(&saved) {
                Some(idx) => registry.current = idx,
                None => debug!(tenant_id = %saved, "Ignoring unknown persisted tenant"),
            }
        }

        Ok(registry)
    }

    pub fn current(&self) -> &Tenant {
        &self.tenants[self.current]
    }

    pub fn available(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn get(&self, tenant_id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|t| t.id == tenant_id)
    }

    /// Make `tenant_id` current and persist the choice. An unknown id
    /// leaves the selection untouched.
    pub fn switch_tenant(&mut self, tenant_id: &str) -> NexusResult<&Tenant> {
        let idx = self
            .position(tenant_id)
            .ok_or_else(|| NexusError::not_found("tenant", tenant_id))?;
        self.current = idx;
        self.store.set(keys::TENANT_SELECTION, tenant_id)?;
        info!(tenant_id, "Switched tenant");
        Ok(self.current())
    }

    /// Add a new tenant, select it, and persist the selection.
    pub fn create_tenant(&mut self, input: CreateTenant) -> NexusResult<&Tenant> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(NexusError::Validation {
                message: "tenant name must not be empty".into(),
            });
        }

        let tenant = Tenant {
            id: format!("tenant_{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            plan: input.plan,
            logo_url: None,
        };

        let mut created = self.tenants[self.seeded..].to_vec();
        created.push(tenant.clone());
        let raw = serde_json::to_string(&created)
            .map_err(|e| NexusError::Serialization(e.to_string()))?;
        self.store.set(keys::CREATED_TENANTS, &raw)?;
        self.store.set(keys::TENANT_SELECTION, &tenant.id)?;
        info!(tenant_id = %tenant.id, name = %tenant.name, "Created tenant");

        self.tenants.push(tenant);
        self.current = self.tenants.len() - 1;
        Ok(self.current())
    }

    /// Shorthand for the workspace created at signup.
    pub fn create_workspace(&mut self, name: &str) -> NexusResult<&Tenant> {
        self.create_tenant(CreateTenant {
            name: name.to_string(),
            plan: Plan::Free,
        })
    }

    fn persisted_created(&self) -> Vec<Tenant> {
        let Some(raw) = self.store.get(keys::CREATED_TENANTS).ok().flatten() else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Discarding corrupt created tenant list");
            Vec::new()
        })
    }

    fn position(&self, tenant_id: &str) -> Option<usize> {
        self.tenants.iter().position(|t| t.id == tenant_id)
    }
}
