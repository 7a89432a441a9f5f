//! Trainer collection store.

use crate::client::ApiClient;
use crate::domain::event::{Event, NewEvent};
use crate::domain::user::{User, UserPatch};
use crate::error::Result;

use super::collection::CollectionStore;

/// Client-side state for trainer accounts.
#[derive(Debug, Clone)]
pub struct TrainerStore {
    client: ApiClient,
    state: CollectionStore<User>,
}

impl TrainerStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: CollectionStore::new(),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let token = self.state.begin_fetch();
        match self.client.trainers().list().await {
            Ok(items) => {
                self.state.complete_fetch(token, Ok(items));
                Ok(())
            }
            Err(err) => {
                self.state.complete_fetch(token, Err(err.to_string()));
                Err(err)
            }
        }
    }

    pub async fn create(
        &self,
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User> {
        let created = self
            .state
            .track(
                "trainers.create",
                self.client.trainers().create(full_name, email, password),
            )
            .await?;
        self.state.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<User> {
        let updated = self
            .state
            .track("trainers.update", self.client.trainers().update(id, patch))
            .await?;
        self.state.replace(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .track("trainers.delete", self.client.trainers().delete(id))
            .await?;
        self.state.remove(id);
        Ok(())
    }

    /// Schedule an event run by a trainer; the event lands in the event
    /// store on its next refresh, not here.
    pub async fn schedule_event(&self, trainer_id: i64, event: NewEvent) -> Result<Event> {
        self.state
            .track(
                "trainers.schedule_event",
                self.client.trainers().schedule_event(trainer_id, event),
            )
            .await
    }

    #[must_use]
    pub fn trainers(&self) -> Vec<User> {
        self.state.items()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
