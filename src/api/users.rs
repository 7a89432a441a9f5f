//! Users and roles API.

use crate::client::ApiClient;
use crate::domain::user::{NewUser, Role, User, UserListResponse, UserPatch};
use crate::error::Result;

/// Users API client.
#[derive(Debug)]
pub struct UsersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl UsersApi<'_> {
    /// List users, optionally filtered by exact `full_name`.
    ///
    /// Handles both the bare-array and paginated response envelopes.
    pub async fn list(&self, full_name: Option<&str>) -> Result<Vec<User>> {
        let response: UserListResponse = match full_name {
            Some(name) => {
                self.client
                    .get_with_query("/users/", &[("full_name", name.to_string())])
                    .await?
            }
            None => self.client.get("/users/").await?,
        };
        Ok(response.into_users())
    }

    /// Get a user by id.
    pub async fn get(&self, id: i64) -> Result<User> {
        self.client.get(&format!("/users/{id}/")).await
    }

    /// Create a user account.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        self.client.post("/users/", user).await
    }

    /// Update a user.
    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<User> {
        self.client.put(&format!("/users/{id}/"), patch).await
    }

    /// Delete a user.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/users/{id}/")).await
    }

    /// List all roles.
    pub async fn roles(&self) -> Result<Vec<Role>> {
        self.client.get("/roles/").await
    }
}
