//! Integration tests for tenant selection and creation.

use nexus_core::error::NexusError;
use nexus_core::models::tenant::{Plan, Tenant};
use nexus_state::{FileStore, KeyValueStore, MemoryStore, TenantRegistry, keys};

fn seeds() -> Vec<Tenant> {
    vec![
        Tenant {
            id: "tenant_a".into(),
            name: "Acme Corp".into(),
            plan: Plan::Enterprise,
            logo_url: None,
        },
        Tenant {
            id: "tenant_b".into(),
            name: "Startup Inc".into(),
            plan: Plan::Pro,
            logo_url: None,
        },
    ]
}

#[test]
fn defaults_to_first_seed() {
    let registry = TenantRegistry::load(MemoryStore::new(), seeds()).unwrap();
    assert_eq!(registry.current().id, "tenant_a");
    assert_eq!(registry.available().len(), 2);
}

#[test]
fn empty_seed_list_is_rejected() {
    let err = TenantRegistry::load(MemoryStore::new(), Vec::new()).unwrap_err();
    assert!(matches!(err, NexusError::TenantContext));
}

#[test]
fn switch_persists_selection() {
    let store = MemoryStore::new();
    let mut registry = TenantRegistry::load(store.clone(), seeds()).unwrap();
    registry.switch_tenant("tenant_b").unwrap();

    assert_eq!(registry.current().name, "Startup Inc");
    assert_eq!(
        store.get(keys::TENANT_SELECTION).unwrap().as_deref(),
        Some("tenant_b")
    );

    let reloaded = TenantRegistry::load(store, seeds()).unwrap();
    assert_eq!(reloaded.current().id, "tenant_b");
}

#[test]
fn switching_to_unknown_tenant_keeps_selection() {
    let store = MemoryStore::new();
    let mut registry = TenantRegistry::load(store.clone(), seeds()).unwrap();
    registry.switch_tenant("tenant_b").unwrap();

    let err = registry.switch_tenant("tenant_zz").unwrap_err();
    assert!(matches!(err, NexusError::NotFound { .. }));
    assert_eq!(registry.current().id, "tenant_b");
    assert_eq!(
        store.get(keys::TENANT_SELECTION).unwrap().as_deref(),
        Some("tenant_b")
    );
}

#[test]
fn unknown_persisted_tenant_falls_back_to_default() {
    let store = MemoryStore::new();
    store.set(keys::TENANT_SELECTION, "tenant_gone").unwrap();

    let registry = TenantRegistry::load(store, seeds()).unwrap();
    assert_eq!(registry.current().id, "tenant_a");
}

#[test]
fn created_workspace_is_free_and_selected() {
    let store = MemoryStore::new();
    let mut registry = TenantRegistry::load(store.clone(), seeds()).unwrap();

    let created = registry.create_workspace("Night Shift").unwrap().clone();
    assert_eq!(created.plan, Plan::Free);
    assert!(created.id.starts_with("tenant_"));
    assert_eq!(registry.current().id, created.id);
    assert_eq!(registry.available().len(), 3);
    assert_eq!(
        store.get(keys::TENANT_SELECTION).unwrap(),
        Some(created.id.clone())
    );
}

#[test]
fn blank_workspace_name_is_rejected() {
    let mut registry = TenantRegistry::load(MemoryStore::new(), seeds()).unwrap();
    let err = registry.create_workspace("   ").unwrap_err();
    assert!(matches!(err, NexusError::Validation { .. }));
    assert_eq!(registry.current().id, "tenant_a");
}

#[test]
fn selection_survives_file_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut registry = TenantRegistry::load(FileStore::open(&path), seeds()).unwrap();
    registry.switch_tenant("tenant_b").unwrap();

    let reopened = TenantRegistry::load(FileStore::open(&path), seeds()).unwrap();
    assert_eq!(reopened.current().id, "tenant_b");
}

#[test]
fn created_workspace_stays_current_after_reload() {
    let store = MemoryStore::new();
    let mut registry = TenantRegistry::load(store.clone(), seeds()).unwrap();
    let created = registry.create_workspace("Night Shift").unwrap().clone();

    let reloaded = TenantRegistry::load(store, seeds()).unwrap();
    assert_eq!(reloaded.current(), &created);
    assert_eq!(reloaded.available().len(), 3);
    assert_eq!(reloaded.get(&created.id).map(|t| t.plan), Some(Plan::Free));
}

#[test]
fn created_workspaces_accumulate_across_file_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut first = TenantRegistry::load(FileStore::open(&path), seeds()).unwrap();
    let day = first.create_workspace("Day Shift").unwrap().clone();

    let mut second = TenantRegistry::load(FileStore::open(&path), seeds()).unwrap();
    assert_eq!(second.current().id, day.id);
    let night = second.create_workspace("Night Shift").unwrap().clone();

    let third = TenantRegistry::load(FileStore::open(&path), seeds()).unwrap();
    let ids: Vec<&str> = third.available().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["tenant_a", "tenant_b", day.id.as_str(), night.id.as_str()]);
    assert_eq!(third.current().id, night.id);
}

#[test]
fn corrupt_created_tenant_list_is_ignored() {
    let store = MemoryStore::new();
    store.set(keys::CREATED_TENANTS, "{not a list").unwrap();
    store.set(keys::TENANT_SELECTION, "tenant_b").unwrap();

    let registry = TenantRegistry::load(store, seeds()).unwrap();
    assert_eq!(registry.available().len(), 2);
    assert_eq!(registry.current().id, "tenant_b");
}
