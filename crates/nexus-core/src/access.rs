//! Role-based capability checks.

use crate::models::user::UserRole;

/// Views and actions that can be gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Dashboard,
    CallHistory,
    Agents,
    Settings,
}

/// Whether `role` may open `resource`.
///
/// Tenant settings are admin-only; every authenticated role can read
/// the analytics views.
pub fn can_access(role: UserRole, resource: Resource) -> bool {
    match resource {
        Resource::Settings => role == UserRole::Admin,
        Resource::Dashboard | Resource::CallHistory | Resource::Agents => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_is_denied_settings_only() {
        assert!(!can_access(UserRole::Viewer, Resource::Settings));
        assert!(can_access(UserRole::Viewer, Resource::Dashboard));
        assert!(can_access(UserRole::Viewer, Resource::CallHistory));
        assert!(can_access(UserRole::Viewer, Resource::Agents));
    }

    #[test]
    fn admin_reaches_everything() {
        for resource in [
            Resource::Dashboard,
            Resource::CallHistory,
            Resource::Agents,
            Resource::Settings,
        ] {
            assert!(can_access(UserRole::Admin, resource));
        }
    }
}
