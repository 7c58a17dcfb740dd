//! User account entity returned by the authentication endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The account object associated with an authenticated session.
///
/// The wire format is camelCase JSON as produced by the platform API; the
/// document store emits either `id` or `_id` for the identifier depending on
/// the serializer in front of it, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned account identifier
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name chosen at registration
    pub name: String,

    /// Account email address (the login identifier)
    pub email: String,

    /// Platform role, when the server assigns one (e.g. "founder", "admin")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Account creation timestamp, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "64f1c2a9e4b0a1b2c3d4e5f6",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "founder",
            "createdAt": "2024-01-15T09:30:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "64f1c2a9e4b0a1b2c3d4e5f6");
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.role.as_deref(), Some("founder"));
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_user_accepts_underscore_id() {
        let json = r#"{
            "_id": "64f1c2a9e4b0a1b2c3d4e5f6",
            "name": "Ada Lovelace",
            "email": "ada@example.com"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "64f1c2a9e4b0a1b2c3d4e5f6");
        assert!(user.role.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_user_missing_required_field_fails() {
        let json = r#"{ "id": "1", "name": "No Email" }"#;

        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
