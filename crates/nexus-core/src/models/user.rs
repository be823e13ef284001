//! User domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Viewer,
}

/// An authenticated identity. Immutable once the session holds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_uppercase() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let role: UserRole = serde_json::from_str("\"VIEWER\"").unwrap();
        assert_eq!(role, UserRole::Viewer);
    }

    #[test]
    fn user_without_avatar_roundtrips() {
        let user = User {
            id: "u_9".into(),
            email: "ops@nexus.ai".into(),
            name: "Ops".into(),
            role: UserRole::Viewer,
            avatar_url: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatarUrl"));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
