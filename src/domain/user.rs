//! User and role records.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Role id the backend assigns to mentor accounts.
pub const MENTOR_ROLE_ID: i64 = 4;
/// Role id the backend assigns to trainer accounts.
pub const TRAINER_ROLE_ID: i64 = 5;

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: i64,
    /// Display name; team resolution matches on this exactly.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Numeric role id.
    pub role: i64,
    /// Human-readable role name, when the endpoint expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Keyed for User {
    fn key(&self) -> i64 {
        self.id
    }
}

/// A role record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Payload for creating a user account.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Numeric role id.
    pub role: i64,
}

/// Partial update payload for a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// The user list endpoint returns either a bare array or a paginated
/// envelope, depending on backend configuration. Decode both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserListResponse {
    Plain(Vec<User>),
    Paginated { results: Vec<User> },
}

impl UserListResponse {
    /// Flatten to the user list regardless of envelope.
    #[must_use]
    pub fn into_users(self) -> Vec<User> {
        match self {
            Self::Plain(users) | Self::Paginated { results: users } => users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_list_decodes_bare_array() {
        let body = r#"[{"id": 1, "full_name": "Lina", "email": "l@x.dz", "role": 2}]"#;
        let parsed: UserListResponse = serde_json::from_str(body).unwrap();
        let users = parsed.into_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name, "Lina");
    }

    #[test]
    fn test_user_list_decodes_paginated_envelope() {
        let body = r#"{"count": 1, "results": [{"id": 7, "full_name": "Sami", "email": "s@x.dz", "role": 3}]}"#;
        let parsed: UserListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_users()[0].id, 7);
    }
}
