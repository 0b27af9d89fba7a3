use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff identity record, created by the auth service on account creation.
/// An authenticated session without a matching profile row means no access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Exactly two roles exist. Anything else in the column fails
/// deserialization, which downstream role checks treat as no access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
        }
    }
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Admins can do everything a manager can.
    pub fn is_manager(&self) -> bool {
        matches!(self.role, UserRole::Manager | UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_fails_deserialization() {
        let raw = r#"{
            "id": "11111111-2222-3333-4444-555555555555",
            "email": "x@example.com",
            "full_name": "X",
            "role": "superuser",
            "avatar_url": null,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Profile>(raw).is_err());
    }

    #[test]
    fn admin_counts_as_manager() {
        let raw = r#"{
            "id": "11111111-2222-3333-4444-555555555555",
            "email": "x@example.com",
            "full_name": "X",
            "role": "admin",
            "avatar_url": null,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert!(profile.is_admin());
        assert!(profile.is_manager());
    }
}
