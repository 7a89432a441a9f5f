//! Trainers API.

use crate::client::ApiClient;
use crate::domain::event::{Event, NewEvent};
use crate::domain::user::{NewUser, TRAINER_ROLE_ID, User, UserPatch};
use crate::error::Result;

/// Trainers API client.
#[derive(Debug)]
pub struct TrainersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl TrainersApi<'_> {
    /// List all trainers.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.get("/trainers/").await
    }

    /// Get a trainer by id.
    pub async fn get(&self, id: i64) -> Result<User> {
        self.client.get(&format!("/trainers/{id}/")).await
    }

    /// Create a trainer account. The trainer role id is fixed server-side.
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
            role: TRAINER_ROLE_ID,
        };
        self.client.post("/trainers/create/", &user).await
    }

    /// Update a trainer.
    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<User> {
        self.client.put(&format!("/trainers/{id}/"), patch).await
    }

    /// Delete a trainer.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/trainers/{id}/")).await
    }

    /// Schedule an event run by this trainer.
    pub async fn schedule_event(&self, trainer_id: i64, mut event: NewEvent) -> Result<Event> {
        event.user = Some(trainer_id);
        self.client.post("/events/", &event).await
    }
}
