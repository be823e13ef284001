//! Keys of the persisted local state.

/// Opaque session token.
pub const SESSION_TOKEN: &str = "session_token";
/// JSON-serialized [`User`](nexus_core::models::user::User).
pub const SESSION_USER: &str = "session_user";
/// Id of the selected tenant.
pub const TENANT_SELECTION: &str = "tenant_selection";
/// `"true"` or `"false"`.
pub const SIDEBAR_COLLAPSED: &str = "sidebar_collapsed";
/// JSON array of accounts created through signup.
pub const REGISTERED_USERS: &str = "registered_users";
/// JSON array of tenants created in this workspace.
pub const CREATED_TENANTS: &str = "created_tenants";
