//! Mentors API.
//!
//! Mentors are user accounts with the mentor role; the backend exposes them
//! through a dedicated collection with a separate creation endpoint.

use crate::client::ApiClient;
use crate::domain::startup::{NewTeamMember, TeamMember};
use crate::domain::user::{MENTOR_ROLE_ID, NewUser, User, UserPatch};
use crate::error::Result;

/// Mentors API client.
#[derive(Debug)]
pub struct MentorsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl MentorsApi<'_> {
    /// List all mentors.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.get("/mentors/").await
    }

    /// Get a mentor by id.
    pub async fn get(&self, id: i64) -> Result<User> {
        self.client.get(&format!("/mentors/{id}/")).await
    }

    /// Create a mentor account. The mentor role id is fixed server-side.
    pub async fn create(
        &self,
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User> {
        let user = NewUser {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            role: MENTOR_ROLE_ID,
        };
        self.client.post("/mentors/create/", &user).await
    }

    /// Update a mentor.
    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<User> {
        self.client.put(&format!("/mentors/{id}/"), patch).await
    }

    /// Delete a mentor.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/mentors/{id}/")).await
    }

    /// Attach a mentor to a startup's team.
    pub async fn assign_to_startup(
        &self,
        mentor_id: i64,
        startup_id: i64,
        role: impl Into<String>,
    ) -> Result<TeamMember> {
        let member = NewTeamMember {
            user: mentor_id,
            role_in_team: role.into(),
            startup: startup_id,
        };
        self.client
            .post(&format!("/startups/{startup_id}/team/"), &member)
            .await
    }
}
